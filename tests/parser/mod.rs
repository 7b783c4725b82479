mod tests_lexer;
mod tests_token_source;
