use std::sync::Arc;
use std::thread;

use nimbus_bias::{
    BiasCorrector, BiasOffset, BiasTable, CorrectionConfig, SharedBiasTable,
};
use nimbus_blend::TimeOfDayBlender;
use nimbus_calendar::TimeBucket;
use nimbus_regress::{RawPrediction, Unit, Variable};

fn afternoon_offset(variable: Variable, additive: f64) -> BiasOffset {
    BiasOffset {
        variable,
        bucket: TimeBucket::Afternoon,
        additive,
        multiplicative: 1.0,
    }
}

#[test]
fn additive_shift_moves_output_one_for_one() {
    let corrector = BiasCorrector::new(CorrectionConfig::new()).unwrap();
    let raw = RawPrediction::new(Variable::Temperature, 300.0, Unit::Kelvin);
    let blended = TimeOfDayBlender::default().blend(15, &raw, &raw).unwrap();

    let base = corrector.correct(&blended, &BiasTable::identity()).unwrap();
    let table = BiasTable::from_offsets([afternoon_offset(Variable::Temperature, 5.0)]).unwrap();
    let shifted = corrector.correct(&blended, &table).unwrap();

    assert!((shifted.value() - base.value() - 5.0).abs() < 1e-9);
    assert_eq!(base.converted(), shifted.converted());
}

#[test]
fn precipitation_offset_precedes_clamp() {
    let corrector =
        BiasCorrector::new(CorrectionConfig::new().with_precipitation_diurnal(false)).unwrap();
    let raw = RawPrediction::new(Variable::Precipitation, 1.0, Unit::Millimetres);
    let blended = TimeOfDayBlender::default().blend(13, &raw, &raw).unwrap();
    let table = BiasTable::from_offsets([afternoon_offset(Variable::Precipitation, -3.0)]).unwrap();
    assert_eq!(corrector.correct(&blended, &table).unwrap().value(), 0.0);
}

#[test]
fn readers_see_whole_tables_during_publish() {
    let shared = Arc::new(SharedBiasTable::default());
    let tables: Vec<BiasTable> = (1..=50)
        .map(|k| {
            let k = f64::from(k);
            BiasTable::from_offsets(
                Variable::ALL
                    .iter()
                    .map(|&v| afternoon_offset(v, k)),
            )
            .unwrap()
        })
        .collect();

    let writer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            for t in tables {
                shared.publish(t);
            }
        })
    };

    for _ in 0..200 {
        let snap = shared.snapshot();
        let first = snap.get(Variable::Temperature, TimeBucket::Afternoon).additive;
        for v in Variable::ALL {
            assert_eq!(snap.get(v, TimeBucket::Afternoon).additive, first);
        }
    }
    writer.join().unwrap();
    assert_eq!(
        shared
            .snapshot()
            .get(Variable::WindSpeed, TimeBucket::Afternoon)
            .additive,
        50.0
    );
}
