pub mod probe_error;
