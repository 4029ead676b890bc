#![allow(dead_code)]

use autowire::prelude::*;

pub trait Catalog: Send + Sync {}

#[derive(Default, Injectable)]
struct Shelf;

impl Catalog for Shelf {}

#[derive(Default, Injectable)]
struct AppConfig;

#[configuration]
impl AppConfig {
    #[provide]
    fn catalog(&self) -> Arc<dyn Catalog> {
        Arc::new(Shelf)
    }
}

fn main() {}
