pub mod backtrack;
pub mod boruvka;
pub mod kruskal;
pub mod prim;
