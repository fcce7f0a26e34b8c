//! Pricing rules for the individual legs of a distribution plan.

mod tariff;
pub use self::tariff::{find_inter_city_rate, find_intra_city_rate, TariffBand};

mod last_mile;
pub use self::last_mile::last_mile_cost;

mod linehaul;
pub use self::linehaul::linehaul_cost;

mod transport;
pub use self::transport::{select_transport, TransportChoice, TransportClass, TransportSpec, TRANSPORT_CATALOG};
