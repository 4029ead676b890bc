#![allow(dead_code)]

use autowire::prelude::*;

#[derive(Default, Injectable)]
struct AppConfig;

#[configuration]
impl AppConfig {
    #[provide]
    fn limits(&self) -> (u32, u32) {
        (1, 2)
    }
}

fn main() {}
