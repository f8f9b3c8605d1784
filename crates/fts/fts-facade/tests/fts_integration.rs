//! Integration tests for the fuzzy time series stack

use std::sync::Arc;

use fts_facade::prelude::*;

fn sample_data() -> Vec<f64> {
    vec![
        100.0, 102.0, 105.0, 103.0, 108.0, 110.0, 107.0, 112.0, 115.0, 113.0, 118.0, 120.0,
    ]
}

#[test]
fn test_every_model_forecasts_every_point() {
    let data = sample_data();
    let partition = GridPartitioner::new().partition(&data, 7, None).unwrap();

    for kind in ModelKind::ALL {
        let mut model = create_model(kind);
        model.train(&data, &partition.sets, 1).unwrap();
        let forecast = model.forecast(&data).unwrap();
        assert_eq!(forecast.len(), data.len(), "{}", kind);
        assert!(forecast.iter().all(|f| f.is_finite()), "{}", kind);
    }
}

#[test]
fn test_high_order_models_accept_larger_orders() {
    let data = sample_data();
    let partition = GridPartitioner::new().partition(&data, 7, None).unwrap();

    for kind in ModelKind::ALL {
        let mut model = create_model(kind);
        let result = model.train(&data, &partition.sets, 3);
        assert_eq!(result.is_ok(), model.is_high_order(), "{}", kind);
        if result.is_ok() {
            assert_eq!(model.forecast(&data).unwrap().len(), data.len() - 2);
        }
    }
}

#[test]
fn test_forecasts_stay_inside_universe() {
    let data = sample_data();
    let partition = GridPartitioner::new().partition(&data, 9, None).unwrap();
    let (lower, upper) = partition.universe().unwrap();

    let mut model = create_model(ModelKind::HighOrder);
    model.train(&data, &partition.sets, 2).unwrap();
    for f in model.forecast(&data).unwrap() {
        assert!(f >= lower && f <= upper);
    }
}

#[test]
fn test_interval_forecasts_bracket_point_forecasts() {
    let data = sample_data();
    let partition = GridPartitioner::new().partition(&data, 7, None).unwrap();

    for kind in [ModelKind::Interval, ModelKind::ProbabilisticWeighted] {
        let mut model = create_model(kind);
        model.train(&data, &partition.sets, 2).unwrap();
        let points = model.forecast(&data).unwrap();
        let intervals = model.forecast_interval(&data).unwrap();
        assert_eq!(points.len(), intervals.len());
        for (p, i) in points.iter().zip(&intervals) {
            assert!(i.lower <= *p + 1e-9 && *p <= i.upper + 1e-9, "{}: {} not in {:?}", kind, p, i);
        }
    }
}

#[test]
fn test_differential_pipeline() {
    let data = sample_data();
    let diff = create_transformation(TransformationKind::Differential { lag: 1 }).unwrap();
    let partition = GridPartitioner::new()
        .partition(&data, 5, Some(diff.as_ref()))
        .unwrap();
    assert_eq!(partition.transformation.as_deref(), Some("Differential(1)"));

    let mut model = create_model(ModelKind::Chen);
    model.append_transformation(Arc::clone(&diff));
    model.train(&data, &partition.sets, 1).unwrap();

    let forecast = model.forecast(&data).unwrap();
    assert_eq!(forecast.len(), data.len());
    assert!(forecast[1..].iter().all(|f| f.is_finite()));
    // forecasts are levels near the series, not differences
    assert!(forecast[1..].iter().all(|f| *f > 90.0 && *f < 130.0));
}

#[test]
fn test_huarng_partition_trains_models() {
    let data = sample_data();
    let partition = create_partitioner(PartitionerKind::Huarng)
        .partition(&data, 10, None)
        .unwrap();
    assert!(!partition.is_empty());

    let mut model = create_model(ModelKind::ImprovedWeighted);
    model.train(&data, &partition.sets, 1).unwrap();
    assert!(model.is_trained());
}

#[test]
fn test_empty_partition_fails_training() {
    let data = sample_data();
    let partition = GridPartitioner::new().partition(&data, 0, None).unwrap();
    let mut model = create_model(ModelKind::Chen);
    assert_eq!(
        model.train(&data, &partition.sets, 1),
        Err(FtsError::EmptyPartition)
    );
}
