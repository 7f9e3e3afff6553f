use crate::{
    error::EngineError,
    problem::{location::LocationIdx, product::Weight, slab_pricer::Cost},
};

use super::{
    center_weights::CenterWeights,
    route::{Leg, LegKind, Route},
    route_context::RouteContext,
};

/// Total cost of the round trip implied by `start` followed by `rest`.
///
/// The vehicle leaves `start` loaded for the hub. Every center of `rest` is
/// then served with an empty leg out of the hub and a loaded leg back.
pub fn evaluate_route(
    context: &RouteContext,
    weights: &CenterWeights,
    start: LocationIdx,
    rest: &[LocationIdx],
) -> Result<Cost, EngineError> {
    let hub = context.hub();
    let pricer = context.pricer();

    let mut total = pricer.cost(weights.get(start), context.distance(start, hub)?);
    for &center in rest {
        total += pricer.cost(0.0, context.distance(hub, center)?);
        total += pricer.cost(weights.get(center), context.distance(center, hub)?);
    }

    Ok(total)
}

/// The legs of `route` in travel order.
pub fn route_legs(
    context: &RouteContext,
    weights: &CenterWeights,
    route: &Route,
) -> Result<Vec<Leg>, EngineError> {
    let hub = context.hub();
    let mut legs = Vec::with_capacity(route.rest().len() * 2 + 1);

    legs.push(price_leg(
        context,
        route.start(),
        hub,
        LegKind::Loaded,
        weights.get(route.start()),
    )?);

    for &center in route.rest() {
        legs.push(price_leg(context, hub, center, LegKind::Empty, 0.0)?);
        legs.push(price_leg(
            context,
            center,
            hub,
            LegKind::Loaded,
            weights.get(center),
        )?);
    }

    Ok(legs)
}

fn price_leg(
    context: &RouteContext,
    from: LocationIdx,
    to: LocationIdx,
    kind: LegKind,
    weight: Weight,
) -> Result<Leg, EngineError> {
    let distance = context.distance(from, to)?;

    Ok(Leg {
        from,
        to,
        kind,
        weight,
        distance,
        cost: context.pricer().cost(weight, distance),
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        error::EngineError,
        problem::{
            distance_table::DistanceTable,
            location::{Location, LocationIdx},
            slab_pricer::SlabPricer,
        },
        solver::{
            center_weights::CenterWeights,
            route::{LegKind, Route},
            route_context::RouteContext,
        },
        test_utils,
    };

    use super::{evaluate_route, route_legs};

    #[test]
    fn test_single_center_route() {
        let catalog = test_utils::create_scenario_catalog();
        let context = RouteContext::from_catalog(&catalog);
        let weights = test_utils::scenario_weights(&catalog);
        let c2 = catalog.location_id("C2").unwrap();

        let cost = evaluate_route(&context, &weights, c2, &[]).unwrap();

        assert_eq!(cost, 132.0);
    }

    #[test]
    fn test_round_trip_cost() {
        let catalog = test_utils::create_scenario_catalog();
        let context = RouteContext::from_catalog(&catalog);
        let weights = test_utils::scenario_weights(&catalog);
        let [c1, c2, c3] = test_utils::scenario_centers(&catalog);

        // 132 (C2 loaded) + 30 + 30 (C1 out and back) + 20 + 20 (C3 out and back)
        assert_eq!(
            evaluate_route(&context, &weights, c2, &[c1, c3]).unwrap(),
            232.0
        );
        // 30 (C1 loaded) + 20 + 132 (C2) + 20 + 20 (C3)
        assert_eq!(
            evaluate_route(&context, &weights, c1, &[c2, c3]).unwrap(),
            222.0
        );
    }

    #[test]
    fn test_legs_match_evaluated_cost() {
        let catalog = test_utils::create_scenario_catalog();
        let context = RouteContext::from_catalog(&catalog);
        let weights = test_utils::scenario_weights(&catalog);
        let [c1, c2, c3] = test_utils::scenario_centers(&catalog);
        let route = Route::new(c3, vec![c2, c1]);

        let legs = route_legs(&context, &weights, &route).unwrap();

        assert_eq!(legs.len(), 5);
        assert_eq!(
            legs.iter().map(|leg| leg.kind).collect::<Vec<_>>(),
            vec![
                LegKind::Loaded,
                LegKind::Empty,
                LegKind::Loaded,
                LegKind::Empty,
                LegKind::Loaded,
            ]
        );
        assert_eq!(legs[1].from, catalog.hub());
        assert_eq!(legs[1].to, c2);
        assert_eq!(legs[1].weight, 0.0);

        let total = legs.iter().map(|leg| leg.cost).sum::<f64>();
        assert_eq!(
            total,
            evaluate_route(&context, &weights, c3, &[c2, c1]).unwrap()
        );
    }

    #[test]
    fn test_loaded_leg_uses_center_to_hub_distance() {
        let locations = vec![Location::center("C1"), Location::hub("L1")];
        let (c1, hub) = (LocationIdx::new(0), LocationIdx::new(1));
        let mut distances = DistanceTable::new(2);
        distances.set(c1, hub, 1.0);
        distances.set(hub, c1, 5.0);
        let pricer = SlabPricer::default();

        let context = RouteContext::new(&locations, &distances, &pricer, hub);
        let weights = CenterWeights::from_weights([(c1, 1.0)]);

        assert_eq!(evaluate_route(&context, &weights, c1, &[]).unwrap(), 10.0);
    }

    #[test]
    fn test_empty_leg_uses_hub_to_center_distance() {
        let locations = vec![
            Location::center("C1"),
            Location::center("C2"),
            Location::hub("L1"),
        ];
        let (a, b, hub) = (LocationIdx::new(0), LocationIdx::new(1), LocationIdx::new(2));
        let mut distances = DistanceTable::new(3);
        distances.set(a, hub, 1.0);
        distances.set(hub, a, 1.0);
        distances.set(b, hub, 1.0);
        distances.set(hub, b, 4.0);
        let pricer = SlabPricer::default();

        let context = RouteContext::new(&locations, &distances, &pricer, hub);
        let weights = CenterWeights::from_weights([(a, 1.0), (b, 1.0)]);

        // Starting at B skips the long hub -> B leg.
        assert_eq!(evaluate_route(&context, &weights, b, &[a]).unwrap(), 30.0);
        assert_eq!(evaluate_route(&context, &weights, a, &[b]).unwrap(), 60.0);
    }

    #[test]
    fn test_missing_distance_fails() {
        let locations = vec![
            Location::center("C1"),
            Location::center("C2"),
            Location::hub("L1"),
        ];
        let (c1, c2, hub) = (LocationIdx::new(0), LocationIdx::new(1), LocationIdx::new(2));
        let mut distances = DistanceTable::new(3);
        distances.set(c1, hub, 3.0);
        distances.set(c2, hub, 2.0);
        let pricer = SlabPricer::default();
        let context = RouteContext::new(&locations, &distances, &pricer, hub);
        let weights = CenterWeights::from_weights([(c1, 1.0), (c2, 1.0)]);

        assert_eq!(
            evaluate_route(&context, &weights, c1, &[c2]),
            Err(EngineError::MissingDistance {
                from: String::from("L1"),
                to: String::from("C2"),
            })
        );
        assert!(route_legs(&context, &weights, &Route::new(c2, vec![c1])).is_err());
    }
}
