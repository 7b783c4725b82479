mod tests_fixtures;
mod tests_recovery;
mod tests_resolution;
