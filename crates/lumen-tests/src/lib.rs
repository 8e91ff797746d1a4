//! Integration tests for lumen crates.
//!
//! End-to-end scenarios that combine the kernel types with the mesh,
//! color and noise utilities. `glam_parity` cross-checks the matrix and
//! quaternion kernels against `glam`.

#[cfg(test)]
mod glam_parity;
