/// Where the station array lives in the directory document and which
/// fields of each entry hold what.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    pub stations_path: Vec<String>,
    pub id_field: String,
    pub name_field: String,
    pub longitude_field: String,
    pub latitude_field: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            stations_path: vec!["data".into(), "stations".into()],
            id_field: "Number".into(),
            name_field: "NAME".into(),
            longitude_field: "lon".into(),
            latitude_field: "lat".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripLogConfig {
    pub start_station_column: String,
    pub end_station_column: String,
}

impl Default for TripLogConfig {
    fn default() -> Self {
        Self {
            start_station_column: "start_station_id".into(),
            end_station_column: "end_station_id".into(),
        }
    }
}
