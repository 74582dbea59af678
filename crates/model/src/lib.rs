pub mod feature;
pub mod location;
pub mod route;
pub mod shape;
pub mod waypoint;

pub trait ExampleData {
    fn example_data() -> Self;
}
