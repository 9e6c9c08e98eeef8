//! Command line argument handling for the `ipv4-subnet-calc` binary.
//!
//! Usage: `ipv4-subnet-calc [CIDR | IP MASK] [ADDRESS...]`
//!
//! A single host is given as `IP/32`; a bare `IP` is always followed by its mask.

use crate::config;
use crate::error::Result;
use crate::models::{AddressArg, Network};

/// Pick the network to report on and the addresses to test against it.
///
/// * no arguments: the CIDR from `SUBNET_CALC_CIDR`, else [`config::DEFAULT_DEMO_CIDR`]
/// * `CIDR ADDRESS...`: first argument contains a `/`
/// * `IP MASK ADDRESS...`: anything else; the second argument must be a subnet mask
pub fn parse_args(args: &[String]) -> Result<(Network, &[String])> {
    let Some(first) = args.first() else {
        let cidr = config::env_or(config::ENV_CIDR, config::DEFAULT_DEMO_CIDR);
        log::debug!("No network argument, using {cidr}");
        return Ok((Network::from_cidr(&cidr)?, &[]));
    };

    if first.contains('/') {
        return Ok((Network::from_cidr(first)?, &args[1..]));
    }

    let subnet_mask = AddressArg::from(args.get(1));
    let network = Network::new(first, subnet_mask)?;
    Ok((network, args.get(2..).unwrap_or(&[])))
}
