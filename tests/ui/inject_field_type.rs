#![allow(dead_code)]

use autowire::prelude::*;

#[derive(Default, Injectable)]
struct Checkout {
    #[inject]
    total: u64,
}

fn main() {}
