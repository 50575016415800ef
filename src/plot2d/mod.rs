pub mod graph_controller;
