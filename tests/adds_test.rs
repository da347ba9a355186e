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

use time::macros::datetime;

const METAR_DATA: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns:xsd="http://www.w3.org/2001/XMLSchema"
          xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
          version="1.2"
          xsi:noNamespaceSchemaLocation="http://aviationweather.gov/adds/schema/metar1_2.xsd">
  <request_index>56465</request_index>
  <data_source name="metars"/>
  <request type="retrieve"/>
  <errors/>
  <warnings/>
  <time_taken_ms>5</time_taken_ms>
  <data num_results="2">
    <METAR>
      <raw_text>KDEN 011753Z 36015G25KT 10SM -RA BKN080 OVC120 18/12 A2992 RMK AO2 SLP101</raw_text>
      <station_id>KDEN</station_id>
      <observation_time>2021-06-01T17:53:00Z</observation_time>
      <latitude>39.85</latitude>
      <longitude>-104.65</longitude>
      <temp_c>18.0</temp_c>
      <dewpoint_c>12.0</dewpoint_c>
      <wind_dir_degrees>360</wind_dir_degrees>
      <wind_speed_kt>15</wind_speed_kt>
      <wind_gust_kt>25</wind_gust_kt>
      <visibility_statute_mi>10.0</visibility_statute_mi>
      <altim_in_hg>29.92</altim_in_hg>
      <sea_level_pressure_mb>1010.1</sea_level_pressure_mb>
      <quality_control_flags>
        <auto_station>TRUE</auto_station>
      </quality_control_flags>
      <wx_string>-RA</wx_string>
      <sky_condition sky_cover="BKN" cloud_base_ft_agl="8000"/>
      <sky_condition sky_cover="OVC" cloud_base_ft_agl="12000"/>
      <flight_category>VFR</flight_category>
      <three_hr_pressure_tendency_mb>-1.5</three_hr_pressure_tendency_mb>
      <maxT_c>21.1</maxT_c>
      <minT_c>11.7</minT_c>
      <maxT24hr_c>22.8</maxT24hr_c>
      <minT24hr_c>10.0</minT24hr_c>
      <precip_in>0.02</precip_in>
      <pcp3hr_in>0.05</pcp3hr_in>
      <pcp6hr_in>0.08</pcp6hr_in>
      <pcp24hr_in>0.11</pcp24hr_in>
      <snow_in>0.0</snow_in>
      <metar_type>METAR</metar_type>
      <elevation_m>1656.0</elevation_m>
    </METAR>
    <METAR>
      <raw_text>KBJC 011747Z VRB03KT 2SM BR VV004 09/08 A3005</raw_text>
      <station_id>KBJC</station_id>
      <observation_time>2021-06-01T17:47:00Z</observation_time>
      <latitude>39.9</latitude>
      <longitude>-105.12</longitude>
      <temp_c>9.0</temp_c>
      <dewpoint_c>8.0</dewpoint_c>
      <visibility_statute_mi>2.0</visibility_statute_mi>
      <altim_in_hg>30.05</altim_in_hg>
      <wx_string>BR</wx_string>
      <flight_category>IFR</flight_category>
      <vert_vis_ft>400</vert_vis_ft>
      <metar_type>SPECI</metar_type>
      <elevation_m>1729.0</elevation_m>
    </METAR>
  </data>
</response>"#;

const TAF_DATA: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns:xsd="http://www.w3.org/2001/XMLSchema"
          xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
          version="1.2"
          xsi:noNamespaceSchemaLocation="http://aviationweather.gov/adds/schema/taf1_2.xsd">
  <request_index>133931</request_index>
  <data_source name="tafs"/>
  <request type="retrieve"/>
  <errors/>
  <warnings/>
  <time_taken_ms>9</time_taken_ms>
  <data num_results="1">
    <TAF>
      <raw_text>KSFO 011720Z 0118/0224 29012KT P6SM FEW008 SCT200 WS020/31040KT TEMPO 0118/0120 BKN008</raw_text>
      <station_id>KSFO</station_id>
      <issue_time>2021-06-01T17:20:00Z</issue_time>
      <bulletin_time>2021-06-01T17:26:00Z</bulletin_time>
      <valid_time_from>2021-06-01T18:00:00Z</valid_time_from>
      <valid_time_to>2021-06-02T18:00:00Z</valid_time_to>
      <remarks>AMD NOT SKED</remarks>
      <latitude>37.62</latitude>
      <longitude>-122.37</longitude>
      <elevation_m>3.0</elevation_m>
      <forecast>
        <fcst_time_from>2021-06-01T18:00:00Z</fcst_time_from>
        <fcst_time_to>2021-06-02T00:00:00Z</fcst_time_to>
        <wind_dir_degrees>290</wind_dir_degrees>
        <wind_speed_kt>12</wind_speed_kt>
        <wind_shear_hgt_ft_agl>2000</wind_shear_hgt_ft_agl>
        <wind_shear_dir_degrees>310</wind_shear_dir_degrees>
        <wind_shear_speed_kt>40</wind_shear_speed_kt>
        <visibility_statute_mi>6.21</visibility_statute_mi>
        <sky_condition sky_cover="FEW" cloud_base_ft_agl="800"/>
        <sky_condition sky_cover="SCT" cloud_base_ft_agl="20000" cloud_type="CB"/>
        <turbulence_condition turbulence_intensity="3" turbulence_min_alt_ft_agl="0" turbulence_max_alt_ft_agl="5000"/>
        <icing_condition icing_intensity="2" icing_min_alt_ft_agl="8000" icing_max_alt_ft_agl="12000"/>
        <temperature>
          <valid_time>2021-06-02T00:00:00Z</valid_time>
          <sfc_temp_c>17.0</sfc_temp_c>
          <max_temp_c>21.0</max_temp_c>
          <min_temp_c>12.0</min_temp_c>
        </temperature>
      </forecast>
      <forecast>
        <fcst_time_from>2021-06-01T18:00:00Z</fcst_time_from>
        <fcst_time_to>2021-06-01T20:00:00Z</fcst_time_to>
        <change_indicator>TEMPO</change_indicator>
        <sky_condition sky_cover="BKN" cloud_base_ft_agl="800"/>
      </forecast>
      <forecast>
        <fcst_time_from>2021-06-02T06:00:00Z</fcst_time_from>
        <fcst_time_to>2021-06-02T12:00:00Z</fcst_time_to>
        <change_indicator>BECMG</change_indicator>
        <time_becoming>2021-06-02T07:00:00Z</time_becoming>
        <probability>30</probability>
        <wind_dir_degrees>180</wind_dir_degrees>
        <wind_speed_kt>8</wind_speed_kt>
        <wx_string>-SHRA</wx_string>
        <not_decoded>620304</not_decoded>
        <vert_vis_ft>600</vert_vis_ft>
        <altim_in_hg>29.95</altim_in_hg>
      </forecast>
    </TAF>
  </data>
</response>"#;

const STATION_DATA: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns:xsd="http://www.w3.org/2001/XMLSchema"
          xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
          version="1.0"
          xsi:noNamespaceSchemaLocation="http://aviationweather.gov/adds/schema/station1_0.xsd">
  <request_index>27921</request_index>
  <data_source name="stations"/>
  <request type="retrieve"/>
  <errors/>
  <warnings/>
  <num_results>4</num_results>
  <time_taken_ms>3</time_taken_ms>
  <data>
    <Station>
      <station_id>KDEN</station_id>
      <latitude>39.85</latitude>
      <longitude>-104.65</longitude>
      <elevation_m>1656.0</elevation_m>
      <site>DENVER/INTL</site>
      <country>US</country>
      <site_type>
        <METAR/>
        <TAF/>
        <NEXRAD/>
        <rawinsonde/>
        <WFO_office/>
      </site_type>
    </Station>
    <Station>
      <station_id>KBJC</station_id>
      <latitude>39.9</latitude>
      <longitude>-105.12</longitude>
      <elevation_m>1729.0</elevation_m>
      <site>BROOMFIELD/JEFFCO</site>
      <country>US</country>
      <site_type>
        <METAR/>
      </site_type>
    </Station>
    <Station>
      <station_id>KGJT</station_id>
      <latitude>39.13</latitude>
      <longitude>-108.54</longitude>
      <elevation_m>1475.0</elevation_m>
      <site>GRAND JUNCTION</site>
      <country>US</country>
      <site_type>
        <METAR/>
        <TAF/>
        <wind_profiler/>
      </site_type>
    </Station>
    <Station>
      <station_id>KAPA</station_id>
      <latitude>39.57</latitude>
      <longitude>-104.85</longitude>
      <elevation_m>1793.0</elevation_m>
      <site>DENVER/CENTENNIAL</site>
      <country>US</country>
    </Station>
  </data>
</response>"#;

#[test]
fn parse_metar_response() {
    let response = adds::parse_metars(METAR_DATA).expect("should parse METAR response");

    assert_eq!(response.request_index, 56465);
    assert_eq!(response.data_source, "metars");
    assert_eq!(response.request_type, "retrieve");
    assert!(response.errors.is_empty());
    assert!(response.warnings.is_empty());
    assert_eq!(response.time_taken_ms, 5);
    assert_eq!(response.data.num_results, 2);
    assert_eq!(response.data.metars.len(), 2);

    let kden = &response.data.metars[0];
    assert_eq!(kden.station_id, "KDEN");
    assert!(kden.raw_text.starts_with("KDEN 011753Z"));
    assert_eq!(kden.observation_time, datetime!(2021-06-01 17:53 UTC));
    assert!((kden.latitude - 39.85).abs() < 0.001);
    assert!((kden.longitude - (-104.65)).abs() < 0.001);
    assert_eq!(kden.temp_c, 18.0);
    assert_eq!(kden.dewpoint_c, 12.0);
    assert_eq!(kden.wind_dir_degrees, 360);
    assert_eq!(kden.wind_speed_kt, 15);
    assert_eq!(kden.wind_gust_kt, 25);
    assert_eq!(kden.visibility_statute_mi, 10.0);
    assert_eq!(kden.altim_in_hg, 29.92);
    assert_eq!(kden.sea_level_pressure_mb, 1010.1);
    assert!(kden.quality_control_flags.auto_station);
    assert!(!kden.quality_control_flags.corrected);
    assert_eq!(kden.wx_string, "-RA");
    assert_eq!(kden.sky_conditions.len(), 2);
    assert_eq!(kden.sky_conditions[0].sky_cover, "BKN");
    assert_eq!(kden.sky_conditions[0].cloud_base_ft_agl, 8000);
    assert_eq!(kden.sky_conditions[1].sky_cover, "OVC");
    assert_eq!(kden.flight_category, "VFR");
    assert_eq!(kden.three_hr_pressure_tendency_mb, -1.5);
    assert_eq!(kden.max_t_c, 21.1);
    assert_eq!(kden.min_t_c, 11.7);
    assert_eq!(kden.max_t24hr_c, 22.8);
    assert_eq!(kden.min_t24hr_c, 10.0);
    assert_eq!(kden.precip_in, 0.02);
    assert_eq!(kden.pcp3hr_in, 0.05);
    assert_eq!(kden.pcp6hr_in, 0.08);
    assert_eq!(kden.pcp24hr_in, 0.11);
    assert_eq!(kden.snow_in, 0.0);
    assert_eq!(kden.vert_vis_ft, 0);
    assert_eq!(kden.metar_type, "METAR");
    assert_eq!(kden.elevation_m, 1656.0);

    // The SPECI omits wind; those fields fall back to zero.
    let kbjc = &response.data.metars[1];
    assert_eq!(kbjc.station_id, "KBJC");
    assert_eq!(kbjc.wind_dir_degrees, 0);
    assert_eq!(kbjc.wind_speed_kt, 0);
    assert_eq!(kbjc.vert_vis_ft, 400);
    assert_eq!(kbjc.metar_type, "SPECI");
    assert_eq!(kbjc.flight_category, "IFR");
    assert!(!kbjc.quality_control_flags.auto_station);
}

#[test]
fn parse_taf_response() {
    let response = adds::parse_tafs(TAF_DATA).expect("should parse TAF response");

    assert_eq!(response.request_index, 133931);
    assert_eq!(response.data_source, "tafs");
    assert_eq!(response.data.num_results, 1);
    assert_eq!(response.data.tafs.len(), 1);

    let taf = &response.data.tafs[0];
    assert_eq!(taf.station_id, "KSFO");
    assert_eq!(taf.issue_time, datetime!(2021-06-01 17:20 UTC));
    assert_eq!(taf.bulletin_time, datetime!(2021-06-01 17:26 UTC));
    assert_eq!(taf.valid_time_from, datetime!(2021-06-01 18:00 UTC));
    assert_eq!(taf.remarks, "AMD NOT SKED");
    assert!((taf.latitude - 37.62).abs() < 0.001);
    assert_eq!(taf.elevation_m, 3.0);
    assert_eq!(taf.forecasts.len(), 3);

    let base = &taf.forecasts[0];
    assert_eq!(base.change_indicator, "");
    assert_eq!(base.wind_dir_degrees, 290);
    assert_eq!(base.wind_speed_kt, 12);
    assert_eq!(base.wind_shear_hgt_ft_agl, 2000);
    assert_eq!(base.wind_shear_dir_degrees, 310);
    assert_eq!(base.wind_shear_speed_kt, 40);
    assert_eq!(base.visibility_statute_mi, 6.21);
    assert_eq!(base.sky_conditions.len(), 2);
    assert_eq!(base.sky_conditions[0].sky_cover, "FEW");
    assert_eq!(base.sky_conditions[0].cloud_type, "");
    assert_eq!(base.sky_conditions[1].cloud_type, "CB");
    assert_eq!(base.turbulence_conditions.len(), 1);
    assert_eq!(base.turbulence_conditions[0].intensity, "3");
    assert_eq!(base.turbulence_conditions[0].min_alt_ft_agl, 0);
    assert_eq!(base.turbulence_conditions[0].max_alt_ft_agl, 5000);
    assert_eq!(base.icing_conditions.len(), 1);
    assert_eq!(base.icing_conditions[0].intensity, "2");
    assert_eq!(base.icing_conditions[0].min_alt_ft_agl, 8000);
    assert_eq!(base.temperatures.len(), 1);
    assert_eq!(base.temperatures[0].sfc_temp_c, 17.0);
    assert_eq!(base.temperatures[0].max_temp_c, "21.0");
    assert_eq!(base.temperatures[0].min_temp_c, "12.0");

    let tempo = &taf.forecasts[1];
    assert_eq!(tempo.change_indicator, "TEMPO");
    assert_eq!(tempo.wind_dir_degrees, 0);
    assert_eq!(tempo.wind_speed_kt, 0);
    assert_eq!(tempo.sky_conditions.len(), 1);
    assert_eq!(tempo.sky_conditions[0].sky_cover, "BKN");

    let becmg = &taf.forecasts[2];
    assert_eq!(becmg.change_indicator, "BECMG");
    assert_eq!(becmg.time_becoming, datetime!(2021-06-02 07:00 UTC));
    assert_eq!(becmg.probability, "30");
    assert_eq!(becmg.wx_string, "-SHRA");
    assert_eq!(becmg.not_decoded, "620304");
    assert_eq!(becmg.vert_vis_ft, 600);
    assert_eq!(becmg.altim_in_hg, 29.95);
}

#[test]
fn parse_station_response() {
    let response = adds::parse_stations(STATION_DATA).expect("should parse station response");

    assert_eq!(response.request_index, 27921);
    assert_eq!(response.data_source, "stations");
    assert_eq!(response.num_results, 4);
    assert_eq!(response.time_taken_ms, 3);
    assert_eq!(response.data.stations.len(), 4);

    let kden = &response.data.stations[0];
    assert_eq!(kden.station_id, "KDEN");
    assert_eq!(kden.site, "DENVER/INTL");
    assert_eq!(kden.country, "US");
    assert_eq!(kden.elevation_m, 1656.0);
    assert!(kden.site_type.metar);
    assert!(kden.site_type.taf);
    assert!(kden.site_type.nexrad);
    assert!(kden.site_type.rawinsonde);
    assert!(kden.site_type.wfo_office);
    assert!(!kden.site_type.wind_profiler);

    let kbjc = &response.data.stations[1];
    assert_eq!(kbjc.station_id, "KBJC");
    assert!(kbjc.site_type.metar);
    assert!(!kbjc.site_type.taf);
    assert!(!kbjc.site_type.nexrad);
    assert!(!kbjc.site_type.rawinsonde);
    assert!(!kbjc.site_type.wfo_office);
    assert!(!kbjc.site_type.wind_profiler);

    let kgjt = &response.data.stations[2];
    assert_eq!(kgjt.station_id, "KGJT");
    assert!(kgjt.site_type.metar);
    assert!(kgjt.site_type.taf);
    assert!(kgjt.site_type.wind_profiler);
    assert!(!kgjt.site_type.nexrad);

    // No site_type element at all.
    let kapa = &response.data.stations[3];
    assert_eq!(kapa.station_id, "KAPA");
    assert!(!kapa.site_type.metar);
    assert!(!kapa.site_type.taf);
    assert!(!kapa.site_type.nexrad);
    assert!(!kapa.site_type.rawinsonde);
    assert!(!kapa.site_type.wfo_office);
    assert!(!kapa.site_type.wind_profiler);
}
