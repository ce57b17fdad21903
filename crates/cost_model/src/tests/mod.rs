#[allow(unused_imports)]
use super::*;

mod lib_tests;
