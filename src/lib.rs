// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! ADDS Text Data Server response parser.
//!
//! This crate decodes the XML responses of the aviationweather.gov ADDS
//! Text Data Server (response schema versions 1.0 to 1.2) into typed
//! records. Three document kinds are supported, each with its own entry
//! point:
//!
//! - [`parse_metars`] for METAR observations
//! - [`parse_tafs`] for TAF forecasts
//! - [`parse_stations`] for the station directory
//!
//! Each entry point is a pure function from the bytes of one response
//! document to a populated record tree or an [`Error`]. Fields the server
//! omitted decode to the zero value of their type; a value that cannot be
//! converted to its field's type fails the whole decode.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), adds::Error> {
//! let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
//! <response version="1.2">
//!   <request_index>12345</request_index>
//!   <data_source name="metars"/>
//!   <request type="retrieve"/>
//!   <errors/>
//!   <warnings/>
//!   <time_taken_ms>7</time_taken_ms>
//!   <data num_results="1">
//!     <METAR>
//!       <raw_text>KJFK 011753Z 18012KT 10SM FEW250 28/17 A3002</raw_text>
//!       <station_id>KJFK</station_id>
//!       <observation_time>2021-06-01T17:53:00Z</observation_time>
//!       <temp_c>28.0</temp_c>
//!       <dewpoint_c>17.0</dewpoint_c>
//!       <flight_category>VFR</flight_category>
//!     </METAR>
//!   </data>
//! </response>"#;
//!
//! let response = adds::parse_metars(xml)?;
//! assert_eq!(response.data.num_results, 1);
//!
//! let metar = &response.data.metars[0];
//! assert_eq!(metar.station_id, "KJFK");
//! assert_eq!(metar.temp_c, 28.0);
//! assert_eq!(metar.flight_category, "VFR");
//! # Ok(())
//! # }
//! ```

mod error;
mod parser;
mod responses;
mod xml;

pub use error::Error;
pub use parser::{parse_metars, parse_stations, parse_tafs};
pub use responses::*;
