/// Pure data types for the engine: caller input, the resolved seed record,
/// every generated artifact, and the simulated world state.
pub mod bible;
pub mod biome;
pub mod character;
pub mod context;
pub mod faction;
pub mod input;
pub mod seed;
pub mod state;
pub mod tone;
