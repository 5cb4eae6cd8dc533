/*! Integration tests for nexus-slist.
 *
 * Single test binary, one module per area of the list API:
 * - insert: ordering, stability and bulk insertion
 * - search: kind-exact lookup and run matching
 * - remove: single, bulk and remove-all
 * - resort: changing ranking modes
 * - access: positional access, iteration and rendering
 * - elements: node comparison and arithmetic
 * - serialization: serde round trips (feature `serde`)
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("nexus_slist=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod insert;
mod resort;
#[cfg(feature = "serde")]
mod serialization;
