use wasm_bindgen::prelude::*;
use stellar_engine::*;

mod bodies;
mod scene;
use scene::Orrery;

stellar_web::export_app!(Orrery, "orrery");
