pub mod prompt_request;
