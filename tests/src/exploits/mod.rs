//! Attack simulations against the randomness protocols.

mod slashing_economics;
