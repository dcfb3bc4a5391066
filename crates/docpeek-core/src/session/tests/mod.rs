mod helpers;
mod tests_fragment;
