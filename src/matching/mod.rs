/// Blueprint grid construction
pub mod blueprint;
/// Squared-distance nearest color search
pub mod matcher;
