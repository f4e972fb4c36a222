// Infrastructure layer: storage engine specifics live here,
// behind the domain repository traits.

pub mod db;
pub mod repositories;
