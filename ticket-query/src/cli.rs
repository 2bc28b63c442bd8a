//! Command-line surface.

use clap::Parser;

use crate::domain::TrainType;
use crate::render::TrainTypeFilter;

/// Query train schedules, seat availability and fares between two
/// stations.
#[derive(Debug, Parser)]
#[command(name = "ticket-query", version, about)]
pub struct Args {
    /// Travel date, YYYY-MM-DD
    pub date: String,

    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Only high-speed trains (G)
    #[arg(short = 'g')]
    pub high_speed: bool,

    /// Only bullet trains (D)
    #[arg(short = 'd')]
    pub bullet: bool,

    /// Only fast trains (K)
    #[arg(short = 'k')]
    pub fast: bool,

    /// Only express trains (T)
    #[arg(short = 't')]
    pub express: bool,

    /// Only direct trains (Z)
    #[arg(short = 'z')]
    pub direct: bool,

    /// Only intercity trains (C)
    #[arg(short = 'c')]
    pub intercity: bool,

    /// Verify the upstream TLS certificate instead of accepting the
    /// site's broken chain
    #[arg(long)]
    pub verify_tls: bool,

    /// Skip the per-train fare lookup
    #[arg(long)]
    pub no_prices: bool,
}

impl Args {
    /// Collect the requested train types into a filter.
    pub fn type_filter(&self) -> TrainTypeFilter {
        let flags = [
            (self.high_speed, TrainType::HighSpeed),
            (self.bullet, TrainType::Bullet),
            (self.fast, TrainType::Fast),
            (self.express, TrainType::Express),
            (self.direct, TrainType::Direct),
            (self.intercity, TrainType::Intercity),
        ];

        TrainTypeFilter::new(
            flags
                .into_iter()
                .filter_map(|(set, ty)| set.then_some(ty)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments() {
        let args = Args::try_parse_from(["ticket-query", "2026-08-10", "北京", "上海"]).unwrap();

        assert_eq!(args.date, "2026-08-10");
        assert_eq!(args.from, "北京");
        assert_eq!(args.to, "上海");
        assert!(args.type_filter().is_empty());
        assert!(!args.verify_tls);
        assert!(!args.no_prices);
    }

    #[test]
    fn missing_positionals_fail() {
        assert!(Args::try_parse_from(["ticket-query"]).is_err());
        assert!(Args::try_parse_from(["ticket-query", "2026-08-10", "北京"]).is_err());
    }

    #[test]
    fn combined_short_flags() {
        let args =
            Args::try_parse_from(["ticket-query", "-dg", "2026-08-10", "成都", "南京"]).unwrap();

        assert!(args.bullet);
        assert!(args.high_speed);
        assert!(!args.fast);

        let filter = args.type_filter();
        assert!(!filter.is_empty());
        assert_eq!(
            filter,
            TrainTypeFilter::new([TrainType::HighSpeed, TrainType::Bullet])
        );
    }

    #[test]
    fn long_flags() {
        let args = Args::try_parse_from([
            "ticket-query",
            "--verify-tls",
            "--no-prices",
            "2026-08-10",
            "北京",
            "上海",
        ])
        .unwrap();

        assert!(args.verify_tls);
        assert!(args.no_prices);
    }
}
