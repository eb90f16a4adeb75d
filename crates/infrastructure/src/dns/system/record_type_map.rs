use dnsock_domain::RecordType;
use hickory_resolver::proto::rr::{RData, Record, RecordType as HickoryRecordType};
use serde_json::{json, Map, Value};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building lookups)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::NAPTR => HickoryRecordType::NAPTR,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::HINFO => HickoryRecordType::HINFO,
            RecordType::ANY => HickoryRecordType::ANY,
        }
    }
}

/// Renders a resolved record in the host-resolver schema.
///
/// Every entry carries `host`, `class`, `ttl` and `type`; the payload keys
/// depend on the record type (`ip` for A, `ipv6` for AAAA, `target` for
/// name-valued records, `txt`/`entries` for TXT, ...). Types without a
/// dedicated layout expose their presentation format under `data`.
pub fn record_to_value(record: &Record) -> Value {
    let mut entry = Map::new();
    entry.insert("host".into(), json!(trim_root(record.name().to_utf8())));
    entry.insert("class".into(), json!(record.dns_class().to_string()));
    entry.insert("ttl".into(), json!(record.ttl()));
    entry.insert("type".into(), json!(record.record_type().to_string()));

    match record.data() {
        RData::A(a) => {
            entry.insert("ip".into(), json!(a.0.to_string()));
        }
        RData::AAAA(aaaa) => {
            entry.insert("ipv6".into(), json!(aaaa.0.to_string()));
        }
        RData::CNAME(cname) => {
            entry.insert("target".into(), json!(trim_root(cname.0.to_utf8())));
        }
        RData::NS(ns) => {
            entry.insert("target".into(), json!(trim_root(ns.0.to_utf8())));
        }
        RData::PTR(ptr) => {
            entry.insert("target".into(), json!(trim_root(ptr.0.to_utf8())));
        }
        RData::MX(mx) => {
            entry.insert("pri".into(), json!(mx.preference()));
            entry.insert("target".into(), json!(trim_root(mx.exchange().to_utf8())));
        }
        RData::TXT(txt) => {
            let entries: Vec<String> = txt
                .txt_data()
                .iter()
                .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                .collect();
            entry.insert("txt".into(), json!(entries.concat()));
            entry.insert("entries".into(), json!(entries));
        }
        RData::SOA(soa) => {
            entry.insert("mname".into(), json!(trim_root(soa.mname().to_utf8())));
            entry.insert("rname".into(), json!(trim_root(soa.rname().to_utf8())));
            entry.insert("serial".into(), json!(soa.serial()));
            entry.insert("refresh".into(), json!(soa.refresh()));
            entry.insert("retry".into(), json!(soa.retry()));
            entry.insert("expire".into(), json!(soa.expire()));
            entry.insert("minimum-ttl".into(), json!(soa.minimum()));
        }
        RData::SRV(srv) => {
            entry.insert("pri".into(), json!(srv.priority()));
            entry.insert("weight".into(), json!(srv.weight()));
            entry.insert("port".into(), json!(srv.port()));
            entry.insert("target".into(), json!(trim_root(srv.target().to_utf8())));
        }
        RData::HINFO(hinfo) => {
            entry.insert("cpu".into(), json!(String::from_utf8_lossy(hinfo.cpu())));
            entry.insert("os".into(), json!(String::from_utf8_lossy(hinfo.os())));
        }
        other => {
            entry.insert("data".into(), json!(other.to_string()));
        }
    }

    Value::Object(entry)
}

fn trim_root(name: String) -> String {
    match name.strip_suffix('.') {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => name,
    }
}
