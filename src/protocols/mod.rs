pub mod river_layout;
