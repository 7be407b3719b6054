//! placemark-cli
//! =============
//!
//! Command-line interface for the `placemark-core` KMZ extractor.
//!
//! This crate primarily provides a binary (`placemark-cli`). The library
//! target only exists so docs.rs renders this overview.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! placemark-cli extract No_public_light_buses_labels.kmz
//! placemark-cli stats No_public_light_buses_labels.kmz
//! placemark-cli --store signs.bin seed No_public_light_buses_labels.kmz
//! placemark-cli --store signs.bin list
//! ```
//!
//! `--store` and `--table` may also come from `PLACEMARK_STORE` and
//! `PLACEMARK_TABLE`, either in the environment or in a `.env` file.
//! Log verbosity follows `RUST_LOG` (default `info`).
//!
//! For programmatic access use the [`placemark-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
