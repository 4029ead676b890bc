use autowire::prelude::*;

pub trait Catalog: Send + Sync {
    fn size(&self) -> usize;
}

#[derive(Default, Injectable)]
pub struct Shelf;

impl Catalog for Shelf {
    fn size(&self) -> usize {
        3
    }
}

interface!(dyn Catalog => [Shelf]);

#[derive(Default, Injectable)]
pub struct AppConfig;

#[configuration]
impl AppConfig {
    #[provide]
    fn shelf(&self) -> Arc<Shelf> {
        Arc::new(Shelf)
    }

    #[provide]
    fn limit(&self) -> u32 {
        10
    }
}

fn main() {
    let injector = Injector::new();
    injector.configs(&Arc::new(AppConfig));
    assert!(injector.get::<Shelf>().is_some());
    assert_eq!(injector.get::<dyn Catalog>().map(|c| c.size()), Some(3));
    assert_eq!(injector.get::<u32>().as_deref(), Some(&10));
}
