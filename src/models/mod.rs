pub mod asn;
pub mod statistik;
