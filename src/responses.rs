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

//! Response record types returned by the parser entry points.
//!
//! Each type is a flat representation of one part of an ADDS Text Data
//! Server response with all values already converted: numbers are parsed,
//! timestamps are [`OffsetDateTime`] in UTC, and repeated elements are
//! collected into vectors in document order.
//!
//! The server omits any field it has no value for. An omitted field decodes
//! to the zero value of its type (empty string, `0`, `false`, the Unix
//! epoch, an empty vector), so a zero-valued field is ambiguous between
//! "reported as zero" and "not reported". The wire format carries no way to
//! tell the two apart and this crate does not invent one.

use time::OffsetDateTime;

/// A decoded METAR response, as returned by
/// [`parse_metars`](crate::parse_metars).
///
/// # Examples
///
/// ```no_run
/// # let data: Vec<u8> = vec![];
/// let response = adds::parse_metars(&data).unwrap();
/// for metar in &response.data.metars {
///     println!("{}: {}°C", metar.station_id, metar.temp_c);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct MetarResponse {
    /// Server-assigned index of the request.
    pub request_index: i32,
    /// Name of the data source (e.g. `"metars"`), from the
    /// `data_source` element's `name` attribute.
    pub data_source: String,
    /// Request type (e.g. `"retrieve"`), from the `request` element's
    /// `type` attribute.
    pub request_type: String,
    /// Error messages reported by the server.
    pub errors: Vec<String>,
    /// Warning messages reported by the server.
    pub warnings: Vec<String>,
    /// Server-side processing time in milliseconds.
    pub time_taken_ms: i32,
    /// The observation payload.
    pub data: MetarData,
}

/// The `data` payload of a METAR response.
#[derive(Clone, Debug)]
pub struct MetarData {
    /// Observations in document order.
    pub metars: Vec<Metar>,
    /// Result count from the `num_results` attribute of the `data`
    /// element. Not validated against [`metars`](Self::metars).
    pub num_results: i32,
}

/// A single METAR observation.
///
/// Units follow the wire format: temperatures in °C, visibility in statute
/// miles, altimeter setting in inches of mercury, sea level pressure in
/// millibars, altitudes in feet AGL, elevation in meters.
#[derive(Clone, Debug)]
pub struct Metar {
    /// The raw METAR as reported by the station.
    pub raw_text: String,
    /// Station identifier (e.g. `"KJFK"`).
    pub station_id: String,
    /// Time of observation.
    pub observation_time: OffsetDateTime,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Air temperature in °C.
    pub temp_c: f64,
    /// Dewpoint temperature in °C.
    pub dewpoint_c: f64,
    /// Wind direction in degrees, `0` for variable or calm winds.
    pub wind_dir_degrees: i32,
    /// Wind speed in knots.
    pub wind_speed_kt: i32,
    /// Wind gust speed in knots.
    pub wind_gust_kt: i32,
    /// Horizontal visibility in statute miles.
    pub visibility_statute_mi: f64,
    /// Altimeter setting in inches of mercury.
    pub altim_in_hg: f64,
    /// Sea level pressure in millibars.
    pub sea_level_pressure_mb: f64,
    /// Quality control flags for the observation.
    pub quality_control_flags: QualityControlFlags,
    /// Present weather string (e.g. `"-RA BR"`).
    pub wx_string: String,
    /// Cloud layers in document order.
    pub sky_conditions: Vec<SkyCondition>,
    /// Flight category (e.g. `"VFR"`, `"IFR"`).
    pub flight_category: String,
    /// Pressure change over the past three hours in millibars.
    pub three_hr_pressure_tendency_mb: f64,
    /// Maximum temperature over the past six hours in °C.
    pub max_t_c: f64,
    /// Minimum temperature over the past six hours in °C.
    pub min_t_c: f64,
    /// Maximum temperature over the past 24 hours in °C.
    pub max_t24hr_c: f64,
    /// Minimum temperature over the past 24 hours in °C.
    pub min_t24hr_c: f64,
    /// Precipitation since the last report in inches.
    pub precip_in: f64,
    /// Precipitation over the past three hours in inches.
    pub pcp3hr_in: f64,
    /// Precipitation over the past six hours in inches.
    pub pcp6hr_in: f64,
    /// Precipitation over the past 24 hours in inches.
    pub pcp24hr_in: f64,
    /// Snow depth in inches.
    pub snow_in: f64,
    /// Vertical visibility in feet AGL.
    pub vert_vis_ft: i32,
    /// Report type (e.g. `"METAR"`, `"SPECI"`).
    pub metar_type: String,
    /// Station elevation in meters.
    pub elevation_m: f64,
}

/// Quality control flags attached to a METAR observation.
///
/// Each flag is `true` only if the corresponding element is present in the
/// `quality_control_flags` element.
#[derive(Clone, Debug, Default)]
pub struct QualityControlFlags {
    /// The report is a correction of an earlier one.
    pub corrected: bool,
    /// Fully automated report.
    pub auto: bool,
    /// Report from an automated station (AO1/AO2).
    pub auto_station: bool,
    /// The station needs maintenance.
    pub maintenance_indicator_on: bool,
    /// No signal was received from the station.
    pub no_signal: bool,
    /// The lightning detection sensor is not operating.
    pub lightning_sensor_off: bool,
    /// The freezing rain sensor is not operating.
    pub freezing_rain_sensor_off: bool,
    /// The present weather sensor is not operating.
    pub present_weather_sensor_off: bool,
}

/// A cloud layer reported in a METAR observation.
#[derive(Clone, Debug)]
pub struct SkyCondition {
    /// Cover code (e.g. `"FEW"`, `"SCT"`, `"BKN"`, `"OVC"`, `"CLR"`).
    pub sky_cover: String,
    /// Cloud base in feet AGL.
    pub cloud_base_ft_agl: i32,
}

/// A decoded TAF response, as returned by
/// [`parse_tafs`](crate::parse_tafs).
///
/// # Examples
///
/// ```no_run
/// # let data: Vec<u8> = vec![];
/// let response = adds::parse_tafs(&data).unwrap();
/// for taf in &response.data.tafs {
///     println!("{}: {} forecast period(s)", taf.station_id, taf.forecasts.len());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct TafResponse {
    /// Server-assigned index of the request.
    pub request_index: i32,
    /// Name of the data source (e.g. `"tafs"`).
    pub data_source: String,
    /// Request type (e.g. `"retrieve"`).
    pub request_type: String,
    /// Error messages reported by the server.
    pub errors: Vec<String>,
    /// Warning messages reported by the server.
    pub warnings: Vec<String>,
    /// Server-side processing time in milliseconds.
    pub time_taken_ms: i32,
    /// The forecast payload.
    pub data: TafData,
}

/// The `data` payload of a TAF response.
#[derive(Clone, Debug)]
pub struct TafData {
    /// Forecasts in document order, one per station.
    pub tafs: Vec<Taf>,
    /// Result count from the `num_results` attribute of the `data`
    /// element. Not validated against [`tafs`](Self::tafs).
    pub num_results: i32,
}

/// A terminal aerodrome forecast for one station.
#[derive(Clone, Debug)]
pub struct Taf {
    /// The raw TAF as issued.
    pub raw_text: String,
    /// Station identifier (e.g. `"KSFO"`).
    pub station_id: String,
    /// Time the forecast was issued.
    pub issue_time: OffsetDateTime,
    /// Time the bulletin was released.
    pub bulletin_time: OffsetDateTime,
    /// Start of the validity window.
    pub valid_time_from: OffsetDateTime,
    /// End of the validity window.
    pub valid_time_to: OffsetDateTime,
    /// Forecaster remarks.
    pub remarks: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Station elevation in meters.
    pub elevation_m: f64,
    /// Forecast periods in document order.
    pub forecasts: Vec<Forecast>,
}

/// One forecast period within a TAF.
#[derive(Clone, Debug)]
pub struct Forecast {
    /// Start of the period.
    pub fcst_time_from: OffsetDateTime,
    /// End of the period.
    pub fcst_time_to: OffsetDateTime,
    /// Change indicator (e.g. `"TEMPO"`, `"BECMG"`, `"FM"`).
    pub change_indicator: String,
    /// Time by which a `BECMG` change is expected to complete.
    pub time_becoming: OffsetDateTime,
    /// Probability code (e.g. `"30"` for PROB30).
    pub probability: String,
    /// Wind direction in degrees.
    pub wind_dir_degrees: i32,
    /// Wind speed in knots.
    pub wind_speed_kt: i32,
    /// Wind gust speed in knots.
    pub wind_gust_kt: i32,
    /// Height of the wind shear layer in feet AGL.
    pub wind_shear_hgt_ft_agl: i32,
    /// Wind direction above the shear layer in degrees.
    pub wind_shear_dir_degrees: i32,
    /// Wind speed above the shear layer in knots.
    pub wind_shear_speed_kt: i32,
    /// Horizontal visibility in statute miles.
    pub visibility_statute_mi: f64,
    /// Altimeter setting in inches of mercury.
    pub altim_in_hg: f64,
    /// Vertical visibility in feet AGL.
    pub vert_vis_ft: i32,
    /// Forecast weather string (e.g. `"-SHRA"`).
    pub wx_string: String,
    /// Parts of the TAF the server could not decode, passed through
    /// verbatim.
    pub not_decoded: String,
    /// Forecast cloud layers in document order.
    pub sky_conditions: Vec<ForecastSkyCondition>,
    /// Forecast turbulence layers in document order.
    pub turbulence_conditions: Vec<TurbulenceCondition>,
    /// Forecast icing layers in document order.
    pub icing_conditions: Vec<IcingCondition>,
    /// Forecast temperature points in document order.
    pub temperatures: Vec<ForecastTemperature>,
}

/// A forecast cloud layer within a TAF period.
#[derive(Clone, Debug)]
pub struct ForecastSkyCondition {
    /// Cover code (e.g. `"FEW"`, `"SCT"`, `"BKN"`, `"OVC"`).
    pub sky_cover: String,
    /// Cloud base in feet AGL.
    pub cloud_base_ft_agl: i32,
    /// Cloud type (e.g. `"CB"`).
    pub cloud_type: String,
}

/// A forecast turbulence layer within a TAF period.
#[derive(Clone, Debug)]
pub struct TurbulenceCondition {
    /// Intensity code.
    pub intensity: String,
    /// Lower bound of the layer in feet AGL.
    pub min_alt_ft_agl: i32,
    /// Upper bound of the layer in feet AGL.
    pub max_alt_ft_agl: i32,
}

/// A forecast icing layer within a TAF period.
#[derive(Clone, Debug)]
pub struct IcingCondition {
    /// Intensity code.
    pub intensity: String,
    /// Lower bound of the layer in feet AGL.
    pub min_alt_ft_agl: i32,
    /// Upper bound of the layer in feet AGL.
    pub max_alt_ft_agl: i32,
}

/// A forecast temperature point within a TAF period.
///
/// The maximum and minimum temperatures stay raw strings: the wire format
/// reports them as text and converting would lose round-trip fidelity.
#[derive(Clone, Debug)]
pub struct ForecastTemperature {
    /// Time the temperature is valid for.
    pub valid_time: OffsetDateTime,
    /// Surface temperature in °C.
    pub sfc_temp_c: f64,
    /// Maximum temperature, verbatim.
    pub max_temp_c: String,
    /// Minimum temperature, verbatim.
    pub min_temp_c: String,
}

/// A decoded station directory response, as returned by
/// [`parse_stations`](crate::parse_stations).
///
/// Unlike the METAR and TAF responses, the station response reports its
/// result count as a direct child element of the response envelope rather
/// than as an attribute of the `data` element, which is why
/// [`num_results`](Self::num_results) lives here.
#[derive(Clone, Debug)]
pub struct StationsResponse {
    /// Server-assigned index of the request.
    pub request_index: i32,
    /// Name of the data source (e.g. `"stations"`).
    pub data_source: String,
    /// Request type (e.g. `"retrieve"`).
    pub request_type: String,
    /// Error messages reported by the server.
    pub errors: Vec<String>,
    /// Warning messages reported by the server.
    pub warnings: Vec<String>,
    /// Result count from the `num_results` envelope element. Not
    /// validated against the station list.
    pub num_results: i32,
    /// Server-side processing time in milliseconds.
    pub time_taken_ms: i32,
    /// The station payload.
    pub data: StationData,
}

/// The `data` payload of a station directory response.
#[derive(Clone, Debug)]
pub struct StationData {
    /// Stations in document order.
    pub stations: Vec<Station>,
}

/// A single station directory entry.
#[derive(Clone, Debug)]
pub struct Station {
    /// Station identifier (e.g. `"KDEN"`).
    pub station_id: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Station elevation in meters.
    pub elevation_m: f64,
    /// Site name (e.g. `"DENVER/INTL"`).
    pub site: String,
    /// Country code (e.g. `"US"`).
    pub country: String,
    /// Capabilities of the site.
    pub site_type: SiteType,
}

/// Capabilities of a station, decoded from the markers inside its
/// `site_type` element.
///
/// Each flag is `true` only if a marker element of the corresponding name
/// appears inside `site_type`; order and repetition carry no meaning and
/// unrecognized markers are ignored.
///
/// # Examples
///
/// ```no_run
/// # let station: adds::Station = unimplemented!();
/// if station.site_type.metar && station.site_type.taf {
///     println!("{} reports observations and forecasts", station.station_id);
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct SiteType {
    /// The site issues METAR observations.
    pub metar: bool,
    /// The site issues TAF forecasts.
    pub taf: bool,
    /// The site is a weather forecast office (`WFO_office` marker).
    pub wfo_office: bool,
    /// The site operates a NEXRAD weather radar.
    pub nexrad: bool,
    /// The site launches rawinsonde upper-air soundings.
    pub rawinsonde: bool,
    /// The site operates a wind profiler.
    pub wind_profiler: bool,
}
