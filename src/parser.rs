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

use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::Error;
use crate::responses::*;
use crate::xml;

/// Parses a METAR response document.
///
/// # Examples
///
/// ```
/// let xml = br#"
/// <response version="1.2">
///   <data num_results="1">
///     <METAR>
///       <station_id>KJFK</station_id>
///       <temp_c>28.0</temp_c>
///     </METAR>
///   </data>
/// </response>"#;
///
/// let response = adds::parse_metars(xml).unwrap();
/// assert_eq!(response.data.metars[0].station_id, "KJFK");
/// ```
pub fn parse_metars(input: &[u8]) -> Result<MetarResponse, Error> {
    let text = std::str::from_utf8(input)?;
    let x: xml::MetarResponseXml = quick_xml::de::from_str(text)?;
    let response = MetarResponse::try_from(x)?;
    debug!("decoded {} METAR(s)", response.data.metars.len());
    Ok(response)
}

/// Parses a TAF response document.
pub fn parse_tafs(input: &[u8]) -> Result<TafResponse, Error> {
    let text = std::str::from_utf8(input)?;
    let x: xml::TafResponseXml = quick_xml::de::from_str(text)?;
    let response = TafResponse::try_from(x)?;
    debug!("decoded {} TAF(s)", response.data.tafs.len());
    Ok(response)
}

/// Parses a station directory response document.
///
/// The scalar station fields decode through the same mapping as the other
/// responses. The `site_type` capability markers carry information by
/// presence rather than by content, so they are decoded in a second pass
/// over the raw event stream (see [`scan_site_types`]).
pub fn parse_stations(input: &[u8]) -> Result<StationsResponse, Error> {
    let text = std::str::from_utf8(input)?;
    let x: xml::StationsResponseXml = quick_xml::de::from_str(text)?;
    let mut response = StationsResponse::try_from(x)?;

    let site_types = scan_site_types(input)?;
    for (station, site_type) in response.data.stations.iter_mut().zip(site_types) {
        station.site_type = site_type;
    }

    debug!("decoded {} station(s)", response.data.stations.len());
    Ok(response)
}

// ---------------------------------------------------------------------------
// Site type capability scan
// ---------------------------------------------------------------------------

/// Collects one [`SiteType`] per `Station` element, in document order.
///
/// Runs after the serde pass has established that the document is
/// well-formed, so the scan only terminates on end of stream.
fn scan_site_types(input: &[u8]) -> Result<Vec<SiteType>, Error> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut site_types = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Station" => {
                site_types.push(SiteType::default());
            }
            Event::Start(e) if e.local_name().as_ref() == b"site_type" => {
                match site_types.last_mut() {
                    Some(site_type) => scan_markers(&mut reader, site_type)?,
                    // A site_type outside of any station carries no data.
                    None => {
                        reader.read_to_end(e.to_end().name())?;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(site_types)
}

/// Scans the content of one `site_type` element as a flat token stream,
/// setting a flag for every recognized marker name. Repeated markers are
/// no-ops and unrecognized names are skipped, which keeps the scan
/// forward-compatible with marker types added on the server side.
fn scan_markers(reader: &mut Reader<&[u8]>, site_type: &mut SiteType) -> Result<(), Error> {
    let mut depth = 0usize;
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                mark_site_type(site_type, e.local_name().as_ref());
            }
            Event::Empty(e) => mark_site_type(site_type, e.local_name().as_ref()),
            Event::End(_) if depth == 0 => return Ok(()),
            Event::End(_) => depth -= 1,
            Event::Eof => return Ok(()),
            _ => {}
        }
    }
}

fn mark_site_type(site_type: &mut SiteType, name: &[u8]) {
    match name {
        b"METAR" => site_type.metar = true,
        b"TAF" => site_type.taf = true,
        b"WFO_office" => site_type.wfo_office = true,
        b"NEXRAD" => site_type.nexrad = true,
        b"rawinsonde" => site_type.rawinsonde = true,
        b"wind_profiler" => site_type.wind_profiler = true,
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Scalar conversions
// ---------------------------------------------------------------------------

/// Parses a numeric element or attribute value. An absent or empty value
/// decodes to zero.
fn parse_num<T>(field: &'static str, value: Option<String>) -> Result<T, Error>
where
    T: std::str::FromStr + Default,
{
    let Some(s) = value else {
        return Ok(T::default());
    };
    let text = s.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    match text.parse() {
        Ok(n) => Ok(n),
        Err(_) => Err(Error::InvalidValue { field, value: s }),
    }
}

/// Parses an ISO-8601 timestamp with UTC designator (RFC 3339). An absent
/// or empty value decodes to the Unix epoch.
fn parse_timestamp(field: &'static str, value: Option<String>) -> Result<OffsetDateTime, Error> {
    let Some(s) = value else {
        return Ok(OffsetDateTime::UNIX_EPOCH);
    };
    let text = s.trim();
    if text.is_empty() {
        return Ok(OffsetDateTime::UNIX_EPOCH);
    }
    match OffsetDateTime::parse(text, &Rfc3339) {
        Ok(t) => Ok(t),
        Err(_) => Err(Error::InvalidValue { field, value: s }),
    }
}

/// Parses a boolean flag element. An absent element decodes to `false`; a
/// bare element with no text is a presence marker and decodes to `true`.
fn parse_flag(field: &'static str, value: Option<String>) -> Result<bool, Error> {
    let Some(s) = value else {
        return Ok(false);
    };
    let text = s.trim();
    if text.is_empty() {
        return Ok(true);
    }
    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("t") || text == "1" {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") || text.eq_ignore_ascii_case("f") || text == "0" {
        Ok(false)
    } else {
        Err(Error::InvalidValue { field, value: s })
    }
}

// ---------------------------------------------------------------------------
// Conversions from XML structs to public response types
// ---------------------------------------------------------------------------

impl TryFrom<xml::MetarResponseXml> for MetarResponse {
    type Error = Error;

    fn try_from(x: xml::MetarResponseXml) -> Result<Self, Error> {
        Ok(MetarResponse {
            request_index: parse_num("request_index", x.request_index)?,
            data_source: x.data_source.and_then(|s| s.name).unwrap_or_default(),
            request_type: x.request.and_then(|r| r.kind).unwrap_or_default(),
            errors: x.errors.unwrap_or_default().errors,
            warnings: x.warnings.unwrap_or_default().warnings,
            time_taken_ms: parse_num("time_taken_ms", x.time_taken_ms)?,
            data: x.data.unwrap_or_default().try_into()?,
        })
    }
}

impl TryFrom<xml::MetarDataXml> for MetarData {
    type Error = Error;

    fn try_from(x: xml::MetarDataXml) -> Result<Self, Error> {
        Ok(MetarData {
            metars: x
                .metars
                .into_iter()
                .map(Metar::try_from)
                .collect::<Result<_, _>>()?,
            num_results: parse_num("num_results", x.num_results)?,
        })
    }
}

impl TryFrom<xml::MetarXml> for Metar {
    type Error = Error;

    fn try_from(x: xml::MetarXml) -> Result<Self, Error> {
        Ok(Metar {
            raw_text: x.raw_text.unwrap_or_default(),
            station_id: x.station_id.unwrap_or_default(),
            observation_time: parse_timestamp("observation_time", x.observation_time)?,
            latitude: parse_num("latitude", x.latitude)?,
            longitude: parse_num("longitude", x.longitude)?,
            temp_c: parse_num("temp_c", x.temp_c)?,
            dewpoint_c: parse_num("dewpoint_c", x.dewpoint_c)?,
            wind_dir_degrees: parse_num("wind_dir_degrees", x.wind_dir_degrees)?,
            wind_speed_kt: parse_num("wind_speed_kt", x.wind_speed_kt)?,
            wind_gust_kt: parse_num("wind_gust_kt", x.wind_gust_kt)?,
            visibility_statute_mi: parse_num("visibility_statute_mi", x.visibility_statute_mi)?,
            altim_in_hg: parse_num("altim_in_hg", x.altim_in_hg)?,
            sea_level_pressure_mb: parse_num("sea_level_pressure_mb", x.sea_level_pressure_mb)?,
            quality_control_flags: x
                .quality_control_flags
                .map(QualityControlFlags::try_from)
                .transpose()?
                .unwrap_or_default(),
            wx_string: x.wx_string.unwrap_or_default(),
            sky_conditions: x
                .sky_conditions
                .into_iter()
                .map(SkyCondition::try_from)
                .collect::<Result<_, _>>()?,
            flight_category: x.flight_category.unwrap_or_default(),
            three_hr_pressure_tendency_mb: parse_num(
                "three_hr_pressure_tendency_mb",
                x.three_hr_pressure_tendency_mb,
            )?,
            max_t_c: parse_num("maxT_c", x.max_t_c)?,
            min_t_c: parse_num("minT_c", x.min_t_c)?,
            max_t24hr_c: parse_num("maxT24hr_c", x.max_t24hr_c)?,
            min_t24hr_c: parse_num("minT24hr_c", x.min_t24hr_c)?,
            precip_in: parse_num("precip_in", x.precip_in)?,
            pcp3hr_in: parse_num("pcp3hr_in", x.pcp3hr_in)?,
            pcp6hr_in: parse_num("pcp6hr_in", x.pcp6hr_in)?,
            pcp24hr_in: parse_num("pcp24hr_in", x.pcp24hr_in)?,
            snow_in: parse_num("snow_in", x.snow_in)?,
            vert_vis_ft: parse_num("vert_vis_ft", x.vert_vis_ft)?,
            metar_type: x.metar_type.unwrap_or_default(),
            elevation_m: parse_num("elevation_m", x.elevation_m)?,
        })
    }
}

impl TryFrom<xml::QualityControlFlagsXml> for QualityControlFlags {
    type Error = Error;

    fn try_from(x: xml::QualityControlFlagsXml) -> Result<Self, Error> {
        Ok(QualityControlFlags {
            corrected: parse_flag("corrected", x.corrected)?,
            auto: parse_flag("auto", x.auto)?,
            auto_station: parse_flag("auto_station", x.auto_station)?,
            maintenance_indicator_on: parse_flag(
                "maintenance_indicator_on",
                x.maintenance_indicator_on,
            )?,
            no_signal: parse_flag("no_signal", x.no_signal)?,
            lightning_sensor_off: parse_flag("lightning_sensor_off", x.lightning_sensor_off)?,
            freezing_rain_sensor_off: parse_flag(
                "freezing_rain_sensor_off",
                x.freezing_rain_sensor_off,
            )?,
            present_weather_sensor_off: parse_flag(
                "present_weather_sensor_off",
                x.present_weather_sensor_off,
            )?,
        })
    }
}

impl TryFrom<xml::SkyConditionXml> for SkyCondition {
    type Error = Error;

    fn try_from(x: xml::SkyConditionXml) -> Result<Self, Error> {
        Ok(SkyCondition {
            sky_cover: x.sky_cover.unwrap_or_default(),
            cloud_base_ft_agl: parse_num("cloud_base_ft_agl", x.cloud_base_ft_agl)?,
        })
    }
}

impl TryFrom<xml::TafResponseXml> for TafResponse {
    type Error = Error;

    fn try_from(x: xml::TafResponseXml) -> Result<Self, Error> {
        Ok(TafResponse {
            request_index: parse_num("request_index", x.request_index)?,
            data_source: x.data_source.and_then(|s| s.name).unwrap_or_default(),
            request_type: x.request.and_then(|r| r.kind).unwrap_or_default(),
            errors: x.errors.unwrap_or_default().errors,
            warnings: x.warnings.unwrap_or_default().warnings,
            time_taken_ms: parse_num("time_taken_ms", x.time_taken_ms)?,
            data: x.data.unwrap_or_default().try_into()?,
        })
    }
}

impl TryFrom<xml::TafDataXml> for TafData {
    type Error = Error;

    fn try_from(x: xml::TafDataXml) -> Result<Self, Error> {
        Ok(TafData {
            tafs: x
                .tafs
                .into_iter()
                .map(Taf::try_from)
                .collect::<Result<_, _>>()?,
            num_results: parse_num("num_results", x.num_results)?,
        })
    }
}

impl TryFrom<xml::TafXml> for Taf {
    type Error = Error;

    fn try_from(x: xml::TafXml) -> Result<Self, Error> {
        Ok(Taf {
            raw_text: x.raw_text.unwrap_or_default(),
            station_id: x.station_id.unwrap_or_default(),
            issue_time: parse_timestamp("issue_time", x.issue_time)?,
            bulletin_time: parse_timestamp("bulletin_time", x.bulletin_time)?,
            valid_time_from: parse_timestamp("valid_time_from", x.valid_time_from)?,
            valid_time_to: parse_timestamp("valid_time_to", x.valid_time_to)?,
            remarks: x.remarks.unwrap_or_default(),
            latitude: parse_num("latitude", x.latitude)?,
            longitude: parse_num("longitude", x.longitude)?,
            elevation_m: parse_num("elevation_m", x.elevation_m)?,
            forecasts: x
                .forecasts
                .into_iter()
                .map(Forecast::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<xml::ForecastXml> for Forecast {
    type Error = Error;

    fn try_from(x: xml::ForecastXml) -> Result<Self, Error> {
        Ok(Forecast {
            fcst_time_from: parse_timestamp("fcst_time_from", x.fcst_time_from)?,
            fcst_time_to: parse_timestamp("fcst_time_to", x.fcst_time_to)?,
            change_indicator: x.change_indicator.unwrap_or_default(),
            time_becoming: parse_timestamp("time_becoming", x.time_becoming)?,
            probability: x.probability.unwrap_or_default(),
            wind_dir_degrees: parse_num("wind_dir_degrees", x.wind_dir_degrees)?,
            wind_speed_kt: parse_num("wind_speed_kt", x.wind_speed_kt)?,
            wind_gust_kt: parse_num("wind_gust_kt", x.wind_gust_kt)?,
            wind_shear_hgt_ft_agl: parse_num("wind_shear_hgt_ft_agl", x.wind_shear_hgt_ft_agl)?,
            wind_shear_dir_degrees: parse_num("wind_shear_dir_degrees", x.wind_shear_dir_degrees)?,
            wind_shear_speed_kt: parse_num("wind_shear_speed_kt", x.wind_shear_speed_kt)?,
            visibility_statute_mi: parse_num("visibility_statute_mi", x.visibility_statute_mi)?,
            altim_in_hg: parse_num("altim_in_hg", x.altim_in_hg)?,
            vert_vis_ft: parse_num("vert_vis_ft", x.vert_vis_ft)?,
            wx_string: x.wx_string.unwrap_or_default(),
            not_decoded: x.not_decoded.unwrap_or_default(),
            sky_conditions: x
                .sky_conditions
                .into_iter()
                .map(ForecastSkyCondition::try_from)
                .collect::<Result<_, _>>()?,
            turbulence_conditions: x
                .turbulence_conditions
                .into_iter()
                .map(TurbulenceCondition::try_from)
                .collect::<Result<_, _>>()?,
            icing_conditions: x
                .icing_conditions
                .into_iter()
                .map(IcingCondition::try_from)
                .collect::<Result<_, _>>()?,
            temperatures: x
                .temperatures
                .into_iter()
                .map(ForecastTemperature::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<xml::SkyConditionXml> for ForecastSkyCondition {
    type Error = Error;

    fn try_from(x: xml::SkyConditionXml) -> Result<Self, Error> {
        Ok(ForecastSkyCondition {
            sky_cover: x.sky_cover.unwrap_or_default(),
            cloud_base_ft_agl: parse_num("cloud_base_ft_agl", x.cloud_base_ft_agl)?,
            cloud_type: x.cloud_type.unwrap_or_default(),
        })
    }
}

impl TryFrom<xml::TurbulenceConditionXml> for TurbulenceCondition {
    type Error = Error;

    fn try_from(x: xml::TurbulenceConditionXml) -> Result<Self, Error> {
        Ok(TurbulenceCondition {
            intensity: x.intensity.unwrap_or_default(),
            min_alt_ft_agl: parse_num("turbulence_min_alt_ft_agl", x.min_alt_ft_agl)?,
            max_alt_ft_agl: parse_num("turbulence_max_alt_ft_agl", x.max_alt_ft_agl)?,
        })
    }
}

impl TryFrom<xml::IcingConditionXml> for IcingCondition {
    type Error = Error;

    fn try_from(x: xml::IcingConditionXml) -> Result<Self, Error> {
        Ok(IcingCondition {
            intensity: x.intensity.unwrap_or_default(),
            min_alt_ft_agl: parse_num("icing_min_alt_ft_agl", x.min_alt_ft_agl)?,
            max_alt_ft_agl: parse_num("icing_max_alt_ft_agl", x.max_alt_ft_agl)?,
        })
    }
}

impl TryFrom<xml::TemperatureXml> for ForecastTemperature {
    type Error = Error;

    fn try_from(x: xml::TemperatureXml) -> Result<Self, Error> {
        Ok(ForecastTemperature {
            valid_time: parse_timestamp("valid_time", x.valid_time)?,
            sfc_temp_c: parse_num("sfc_temp_c", x.sfc_temp_c)?,
            // Kept verbatim; the wire format reports these as text.
            max_temp_c: x.max_temp_c.unwrap_or_default(),
            min_temp_c: x.min_temp_c.unwrap_or_default(),
        })
    }
}

impl TryFrom<xml::StationsResponseXml> for StationsResponse {
    type Error = Error;

    fn try_from(x: xml::StationsResponseXml) -> Result<Self, Error> {
        Ok(StationsResponse {
            request_index: parse_num("request_index", x.request_index)?,
            data_source: x.data_source.and_then(|s| s.name).unwrap_or_default(),
            request_type: x.request.and_then(|r| r.kind).unwrap_or_default(),
            errors: x.errors.unwrap_or_default().errors,
            warnings: x.warnings.unwrap_or_default().warnings,
            num_results: parse_num("num_results", x.num_results)?,
            time_taken_ms: parse_num("time_taken_ms", x.time_taken_ms)?,
            data: x.data.unwrap_or_default().try_into()?,
        })
    }
}

impl TryFrom<xml::StationDataXml> for StationData {
    type Error = Error;

    fn try_from(x: xml::StationDataXml) -> Result<Self, Error> {
        Ok(StationData {
            stations: x
                .stations
                .into_iter()
                .map(Station::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<xml::StationXml> for Station {
    type Error = Error;

    fn try_from(x: xml::StationXml) -> Result<Self, Error> {
        Ok(Station {
            station_id: x.station_id.unwrap_or_default(),
            latitude: parse_num("latitude", x.latitude)?,
            longitude: parse_num("longitude", x.longitude)?,
            elevation_m: parse_num("elevation_m", x.elevation_m)?,
            site: x.site.unwrap_or_default(),
            country: x.country.unwrap_or_default(),
            // Filled in from the event stream scan.
            site_type: SiteType::default(),
        })
    }
}
