pub mod graph_view;
pub mod series_list;
