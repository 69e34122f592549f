pub mod adapter;
pub mod chiron;
pub mod nodes;
pub mod types;

pub use adapter::{resolve_ephemeris_path, Ephemeris, EphemerisError, SwissEphemerisAdapter};
pub use chiron::{ChironProvider, SwissChironProvider, CHIRON_DATA_FILE};
pub use nodes::{lunar_nodes, north_node_longitude, LunarNodes, NOMINAL_NODE_SPEED, NODE_PROBE_MINUTES};
pub use types::EclipticPosition;
