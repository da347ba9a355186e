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

//! Serde-deserializable structs that mirror the ADDS response XML.
//!
//! These are internal types used by the parser. They map one-to-one to the
//! XML nesting with the element and attribute names published by the data
//! server, then get converted into the flat public response types. All leaf
//! values stay strings here; type conversion happens in the parser so that
//! a malformed value is reported against its field name.
//!
//! Every field is absent-tolerant: a missing element or attribute converts
//! to the zero value of the target type, never to an error.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Shared envelope elements
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct DataSourceXml {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RequestXml {
    #[serde(rename = "@type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorListXml {
    #[serde(rename = "error", default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WarningListXml {
    #[serde(rename = "warning", default)]
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// METAR response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct MetarResponseXml {
    #[serde(default)]
    pub request_index: Option<String>,
    #[serde(default)]
    pub data_source: Option<DataSourceXml>,
    #[serde(default)]
    pub request: Option<RequestXml>,
    #[serde(default)]
    pub errors: Option<ErrorListXml>,
    #[serde(default)]
    pub warnings: Option<WarningListXml>,
    #[serde(default)]
    pub time_taken_ms: Option<String>,
    #[serde(default)]
    pub data: Option<MetarDataXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MetarDataXml {
    #[serde(rename = "@num_results", default)]
    pub num_results: Option<String>,
    #[serde(rename = "METAR", default)]
    pub metars: Vec<MetarXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetarXml {
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub station_id: Option<String>,
    #[serde(default)]
    pub observation_time: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub temp_c: Option<String>,
    #[serde(default)]
    pub dewpoint_c: Option<String>,
    #[serde(default)]
    pub wind_dir_degrees: Option<String>,
    #[serde(default)]
    pub wind_speed_kt: Option<String>,
    #[serde(default)]
    pub wind_gust_kt: Option<String>,
    #[serde(default)]
    pub visibility_statute_mi: Option<String>,
    #[serde(default)]
    pub altim_in_hg: Option<String>,
    #[serde(default)]
    pub sea_level_pressure_mb: Option<String>,
    #[serde(default)]
    pub quality_control_flags: Option<QualityControlFlagsXml>,
    #[serde(default)]
    pub wx_string: Option<String>,
    #[serde(rename = "sky_condition", default)]
    pub sky_conditions: Vec<SkyConditionXml>,
    #[serde(default)]
    pub flight_category: Option<String>,
    #[serde(default)]
    pub three_hr_pressure_tendency_mb: Option<String>,
    #[serde(rename = "maxT_c", default)]
    pub max_t_c: Option<String>,
    #[serde(rename = "minT_c", default)]
    pub min_t_c: Option<String>,
    #[serde(rename = "maxT24hr_c", default)]
    pub max_t24hr_c: Option<String>,
    #[serde(rename = "minT24hr_c", default)]
    pub min_t24hr_c: Option<String>,
    #[serde(default)]
    pub precip_in: Option<String>,
    #[serde(default)]
    pub pcp3hr_in: Option<String>,
    #[serde(default)]
    pub pcp6hr_in: Option<String>,
    #[serde(default)]
    pub pcp24hr_in: Option<String>,
    #[serde(default)]
    pub snow_in: Option<String>,
    #[serde(default)]
    pub vert_vis_ft: Option<String>,
    #[serde(default)]
    pub metar_type: Option<String>,
    #[serde(default)]
    pub elevation_m: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QualityControlFlagsXml {
    #[serde(default)]
    pub corrected: Option<String>,
    #[serde(default)]
    pub auto: Option<String>,
    #[serde(default)]
    pub auto_station: Option<String>,
    #[serde(default)]
    pub maintenance_indicator_on: Option<String>,
    #[serde(default)]
    pub no_signal: Option<String>,
    #[serde(default)]
    pub lightning_sensor_off: Option<String>,
    #[serde(default)]
    pub freezing_rain_sensor_off: Option<String>,
    #[serde(default)]
    pub present_weather_sensor_off: Option<String>,
}

/// Shared by METAR and TAF records; `cloud_type` only ever appears in TAF
/// forecast periods.
#[derive(Debug, Deserialize)]
pub(crate) struct SkyConditionXml {
    #[serde(rename = "@sky_cover", default)]
    pub sky_cover: Option<String>,
    #[serde(rename = "@cloud_base_ft_agl", default)]
    pub cloud_base_ft_agl: Option<String>,
    #[serde(rename = "@cloud_type", default)]
    pub cloud_type: Option<String>,
}

// ---------------------------------------------------------------------------
// TAF response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct TafResponseXml {
    #[serde(default)]
    pub request_index: Option<String>,
    #[serde(default)]
    pub data_source: Option<DataSourceXml>,
    #[serde(default)]
    pub request: Option<RequestXml>,
    #[serde(default)]
    pub errors: Option<ErrorListXml>,
    #[serde(default)]
    pub warnings: Option<WarningListXml>,
    #[serde(default)]
    pub time_taken_ms: Option<String>,
    #[serde(default)]
    pub data: Option<TafDataXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TafDataXml {
    #[serde(rename = "@num_results", default)]
    pub num_results: Option<String>,
    #[serde(rename = "TAF", default)]
    pub tafs: Vec<TafXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TafXml {
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub station_id: Option<String>,
    #[serde(default)]
    pub issue_time: Option<String>,
    #[serde(default)]
    pub bulletin_time: Option<String>,
    #[serde(default)]
    pub valid_time_from: Option<String>,
    #[serde(default)]
    pub valid_time_to: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub elevation_m: Option<String>,
    #[serde(rename = "forecast", default)]
    pub forecasts: Vec<ForecastXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastXml {
    #[serde(default)]
    pub fcst_time_from: Option<String>,
    #[serde(default)]
    pub fcst_time_to: Option<String>,
    #[serde(default)]
    pub change_indicator: Option<String>,
    #[serde(default)]
    pub time_becoming: Option<String>,
    #[serde(default)]
    pub probability: Option<String>,
    #[serde(default)]
    pub wind_dir_degrees: Option<String>,
    #[serde(default)]
    pub wind_speed_kt: Option<String>,
    #[serde(default)]
    pub wind_gust_kt: Option<String>,
    #[serde(default)]
    pub wind_shear_hgt_ft_agl: Option<String>,
    #[serde(default)]
    pub wind_shear_dir_degrees: Option<String>,
    #[serde(default)]
    pub wind_shear_speed_kt: Option<String>,
    #[serde(default)]
    pub visibility_statute_mi: Option<String>,
    #[serde(default)]
    pub altim_in_hg: Option<String>,
    #[serde(default)]
    pub vert_vis_ft: Option<String>,
    #[serde(default)]
    pub wx_string: Option<String>,
    #[serde(default)]
    pub not_decoded: Option<String>,
    #[serde(rename = "sky_condition", default)]
    pub sky_conditions: Vec<SkyConditionXml>,
    #[serde(rename = "turbulence_condition", default)]
    pub turbulence_conditions: Vec<TurbulenceConditionXml>,
    #[serde(rename = "icing_condition", default)]
    pub icing_conditions: Vec<IcingConditionXml>,
    #[serde(rename = "temperature", default)]
    pub temperatures: Vec<TemperatureXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TurbulenceConditionXml {
    #[serde(rename = "@turbulence_intensity", default)]
    pub intensity: Option<String>,
    #[serde(rename = "@turbulence_min_alt_ft_agl", default)]
    pub min_alt_ft_agl: Option<String>,
    #[serde(rename = "@turbulence_max_alt_ft_agl", default)]
    pub max_alt_ft_agl: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IcingConditionXml {
    #[serde(rename = "@icing_intensity", default)]
    pub intensity: Option<String>,
    #[serde(rename = "@icing_min_alt_ft_agl", default)]
    pub min_alt_ft_agl: Option<String>,
    #[serde(rename = "@icing_max_alt_ft_agl", default)]
    pub max_alt_ft_agl: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TemperatureXml {
    #[serde(default)]
    pub valid_time: Option<String>,
    #[serde(default)]
    pub sfc_temp_c: Option<String>,
    #[serde(default)]
    pub max_temp_c: Option<String>,
    #[serde(default)]
    pub min_temp_c: Option<String>,
}

// ---------------------------------------------------------------------------
// Station response
// ---------------------------------------------------------------------------

/// Unlike the METAR and TAF envelopes, the station envelope carries
/// `num_results` as a direct child element instead of a `data` attribute.
#[derive(Debug, Deserialize)]
pub(crate) struct StationsResponseXml {
    #[serde(default)]
    pub request_index: Option<String>,
    #[serde(default)]
    pub data_source: Option<DataSourceXml>,
    #[serde(default)]
    pub request: Option<RequestXml>,
    #[serde(default)]
    pub errors: Option<ErrorListXml>,
    #[serde(default)]
    pub warnings: Option<WarningListXml>,
    #[serde(default)]
    pub num_results: Option<String>,
    #[serde(default)]
    pub time_taken_ms: Option<String>,
    #[serde(default)]
    pub data: Option<StationDataXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StationDataXml {
    #[serde(rename = "Station", default)]
    pub stations: Vec<StationXml>,
}

/// The `site_type` child is deliberately not mirrored here: its markers
/// carry information by presence rather than by content, so the parser
/// decodes it from the raw event stream instead.
#[derive(Debug, Deserialize)]
pub(crate) struct StationXml {
    #[serde(default)]
    pub station_id: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub elevation_m: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}
