pub mod grid_nav;
