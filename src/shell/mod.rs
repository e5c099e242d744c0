// Composition root for the activities service.
//
// - Read config from the environment.
// - Seed the in-memory registry and wire it into the use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
