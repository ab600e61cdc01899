mod ml_error;
