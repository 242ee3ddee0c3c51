/// Errors that can occur while constructing or operating on a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The box width or height was zero.
    #[display("invalid size: width={width}, height={height}")]
    InvalidSize {
        /// The requested box width.
        width: u8,
        /// The requested box height.
        height: u8,
    },
    /// A row or column coordinate was outside `[0, N)`.
    #[display("invalid coordinate: row={row}, col={col}, side={side}")]
    InvalidCoordinate {
        /// The offending row.
        row: u8,
        /// The offending column.
        col: u8,
        /// The side length of the grid the coordinate was checked against.
        side: u8,
    },
}
