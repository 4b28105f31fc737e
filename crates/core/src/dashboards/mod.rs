pub mod d400_shortage_summary;
