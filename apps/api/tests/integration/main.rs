mod helpers;
mod test_random;
