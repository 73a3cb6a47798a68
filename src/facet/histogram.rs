use crate::builder::Facet;
use crate::util::NamedBody;

/// Counts per fixed-width numeric bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramFacet {
    body: NamedBody,
}

impl HistogramFacet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "histogram"),
        }
    }

    facet_common!();

    options! {
        string field / get_field => "field";
        /// Bucket width.
        value interval / get_interval => "interval";
        /// Bucket width as a time value, e.g. `"1.5h"`.
        string time_interval / get_time_interval => "time_interval";
        string key_field / get_key_field => "key_field";
        string value_field / get_value_field => "value_field";
        string key_script / get_key_script => "key_script";
        string value_script / get_value_script => "value_script";
        string lang / get_lang => "lang";
        value params / get_params => "params";
        choice order / get_order => "order" ["key", "count", "total"];
    }
}

impl_builder!(HistogramFacet, Facet);
impl Facet for HistogramFacet {}

/// Counts per calendar-aware time bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct DateHistogramFacet {
    body: NamedBody,
}

impl DateHistogramFacet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "date_histogram"),
        }
    }

    facet_common!();

    options! {
        string field / get_field => "field";
        /// `year`, `quarter`, `month`, `week`, `day`, `hour`, `minute` or a time value.
        string interval / get_interval => "interval";
        /// Hours offset (`-2`) or a zone string (`"-02:30"`).
        value time_zone / get_time_zone => "time_zone";
        value pre_zone / get_pre_zone => "pre_zone";
        value post_zone / get_post_zone => "post_zone";
        bool pre_zone_adjust_large_interval / get_pre_zone_adjust_large_interval => "pre_zone_adjust_large_interval";
        string pre_offset / get_pre_offset => "pre_offset";
        string post_offset / get_post_offset => "post_offset";
        float factor / get_factor => "factor";
        string key_field / get_key_field => "key_field";
        string value_field / get_value_field => "value_field";
        string value_script / get_value_script => "value_script";
        string lang / get_lang => "lang";
        value params / get_params => "params";
        choice order / get_order => "order" ["time", "count", "total"];
    }
}

impl_builder!(DateHistogramFacet, Facet);
impl Facet for DateHistogramFacet {}
