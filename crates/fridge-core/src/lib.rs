//! # fridge-core: Pure Domain State for the Fridge App
//!
//! This crate holds the refrigerator-domain state shared by the whole
//! application, as pure data types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fridge Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend (UI layer)                         │   │
//! │  │    Fridge picker ──► Grocery search ──► Detail views            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                fridge-session (Store Handle)                    │   │
//! │  │    RefrigeratorStore: locking, snapshot persistence             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fridge-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────────┐      ┌──────────────────────────┐        │   │
//! │  │   │     types       │      │          state           │        │   │
//! │  │   │  Refrigerator   │      │    RefrigeratorState     │        │   │
//! │  │   │  GroceryEntity  │      │  getters + mutations     │        │   │
//! │  │   └─────────────────┘      └──────────────────────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Refrigerator, GroceryEntity)
//! - [`state`] - The RefrigeratorState record and its operations
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: File system and network access is FORBIDDEN here
//! 3. **Explicit Shapes**: Entities are structs with documented required fields,
//!    never loosely-typed maps

// =============================================================================
// Module Declarations
// =============================================================================

pub mod state;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fridge_core::Refrigerator` instead of
// `use fridge_core::types::Refrigerator`

pub use state::RefrigeratorState;
pub use types::{GroceryEntity, Refrigerator};
