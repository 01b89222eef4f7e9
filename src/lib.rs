//! Icongen - used-icon manifest generator for ng-zorro-antd projects
//!
//! Icongen is a CLI tool and library that scans an Angular project's source
//! tree for icon references (`anticon-*` CSS classes and `nzType`/`nzTheme`
//! tag attributes), normalizes them to canonical identifiers, and generates
//! an `ant-svg-icons.ts` manifest so the application bundles only the icons
//! it actually uses instead of the whole catalog.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: `angular.json` loading and project resolution
//! - `core`: Core pipeline (scan, extract, resolve, render)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
