#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn burst_is_noop_but_callable() {
    burst();
}
