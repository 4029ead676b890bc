#![allow(dead_code)]

use autowire::prelude::*;

#[derive(Default, Injectable)]
struct AppConfig;

#[configuration]
impl AppConfig {
    #[provide]
    fn warm_up(&self) {}
}

fn main() {}
