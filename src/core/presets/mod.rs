pub mod exploration_points;
pub mod julia_constants;
pub mod quality;

fn list_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
