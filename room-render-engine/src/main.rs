mod engine;
mod store;
mod tools;

use engine::core::app_setup::create_app;

fn main() {
    create_app().run();
}
