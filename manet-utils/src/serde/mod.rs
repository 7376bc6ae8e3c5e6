//! Utility module for serde of types.

use serde::{Deserialize, Serialize};

/// Column names of the flow monitor results, in the order in which the simulation writes them.
/// Used to name the columns of files written without a header row.
pub const COLUMN_NAMES: [&str; 11] = [
    "run",
    "flow_id",
    "src_addr",
    "dst_addr",
    "tx_packets",
    "rx_packets",
    "lost_packets",
    "throughput_mbps",
    "delay_seconds",
    "hop_count",
    "pdr",
];

/// Column names as written in the header of the simulation's own CSV output, in the same order
/// as [`COLUMN_NAMES`].
pub const CAMEL_CASE_COLUMN_NAMES: [&str; 11] = [
    "run",
    "flowId",
    "srcAddr",
    "dstAddr",
    "txPackets",
    "rxPackets",
    "lostPackets",
    "throughputMbps",
    "delaySeconds",
    "hopCount",
    "pdr",
];

/// Struct used to (de-)serialize the statistics of a single flow observed by the flow monitor
/// during one simulation run.
///
/// Accepts both the normalized snake_case column names and the camelCase names written by the
/// simulation itself.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FlowRecord {
    /// Identifier of the simulation run (configuration) the flow was observed in
    pub run: String,
    /// Flow identifier assigned by the flow classifier, unique within a run
    #[serde(alias = "flowId")]
    pub flow_id: u64,
    #[serde(alias = "srcAddr")]
    pub src_addr: String,
    #[serde(alias = "dstAddr")]
    pub dst_addr: String,
    #[serde(alias = "txPackets")]
    pub tx_packets: u64,
    #[serde(alias = "rxPackets")]
    pub rx_packets: u64,
    #[serde(alias = "lostPackets")]
    pub lost_packets: u64,
    /// Received throughput in \[Mbps\], `0` if nothing was received
    #[serde(alias = "throughputMbps")]
    pub throughput_mbps: f64,
    /// Mean end-to-end delay in \[s\], `0` if nothing was received
    #[serde(alias = "delaySeconds")]
    pub delay_seconds: f64,
    /// Mean number of hops of the received packets, `0` if nothing was received
    #[serde(alias = "hopCount")]
    pub hop_count: f64,
    /// Packet delivery ratio in \[0, 1\]
    pub pdr: f64,
}

/// Struct used to serialize the summary statistics of all flows of one cluster type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SummaryRecord {
    pub is_inter_cluster: bool,
    pub throughput_mbps_mean: f64,
    pub throughput_mbps_std: f64,
    pub throughput_mbps_min: f64,
    pub throughput_mbps_max: f64,
    pub delay_seconds_mean: f64,
    pub delay_seconds_std: f64,
    pub delay_seconds_min: f64,
    pub delay_seconds_max: f64,
    pub hop_count_mean: f64,
    pub hop_count_std: f64,
    pub hop_count_min: f64,
    pub hop_count_max: f64,
    pub pdr_mean: f64,
    pub pdr_std: f64,
    pub pdr_min: f64,
    pub pdr_max: f64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_camel_case_header() {
        let data = "run,flowId,srcAddr,dstAddr,txPackets,rxPackets,lostPackets,throughputMbps,delaySeconds,hopCount,pdr\n\
                    1,3,10.1.1.2,10.1.2.2,100,90,10,1.500000,0.020000,2.000000,0.900000\n";
        let mut csv = csv::Reader::from_reader(data.as_bytes());
        let records: Vec<FlowRecord> = csv.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].run, "1");
        assert_eq!(records[0].flow_id, 3);
        assert_eq!(records[0].dst_addr, "10.1.2.2");
        assert_eq!(records[0].hop_count, 2.0);
        assert_eq!(records[0].pdr, 0.9);
    }

    #[test]
    fn deserialize_without_header() {
        let data = "2,1,10.1.1.2,10.1.2.2,100,0,100,0,0,0,0\n";
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(data.as_bytes());
        let headers = csv::StringRecord::from(COLUMN_NAMES.to_vec());
        let record: FlowRecord = csv
            .records()
            .next()
            .unwrap()
            .unwrap()
            .deserialize(Some(&headers))
            .unwrap();
        assert_eq!(record.run, "2");
        assert_eq!(record.lost_packets, 100);
        assert_eq!(record.throughput_mbps, 0.0);
    }
}
