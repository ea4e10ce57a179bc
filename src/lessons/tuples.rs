//! Lessons on the fixed tuple

use crate::error::{Result, SeqError};
use crate::lessons::LessonReport;
use crate::sequence::{SliceSpec, Tuple};
use crate::value::Value;
use crate::{list, tuple};

pub fn basics(report: &mut LessonReport) -> Result<()> {
    report.show("punto_3d", tuple![10, 20, 30]);
    report.show("nombres_fijos", tuple!["Admin", "Guest", "User"]);
    report.show("tupla_vacia", Tuple::empty());
    report.show("tuple([1, 2, 3])", Tuple::from_list(&list![1, 2, 3]));

    // `(50)` is just the number 50 in parentheses.
    let no_es_tupla = Value::Int(50);
    report.show("type((50))", format!("<class '{}'>", no_es_tupla.type_name()));
    let si_es_tupla = Value::Tuple(Tuple::single(50));
    report.show("type((50,))", format!("<class '{}'>", si_es_tupla.type_name()));
    report.show("(50,)", &si_es_tupla);

    let mi_tupla = tuple![100, 200, 300, 400];
    report.show("mi_tupla[0]", mi_tupla.get(0)?);
    report.show("mi_tupla[-1]", mi_tupla.get(-1)?);
    report.show("mi_tupla[1:3]", mi_tupla.slice(&SliceSpec::range(1, 3))?);

    let t1 = tuple![1, 2];
    let t2 = tuple![3, 4];
    let t3 = t1.concat(&t2);
    report.show("t1 + t2", &t3);
    report.show("t1 * 2", t1.repeat(2));
    report.show("len(t3)", t3.len());

    report.text("Primary colours:");
    for color in &tuple!["rojo", "verde", "azul"] {
        report.text(color.plain());
    }
    Ok(())
}

pub fn immutability(report: &mut LessonReport) -> Result<()> {
    let config = tuple!["localhost", 8080];
    report.show("config", &config);

    if let Err(e) = config.set_item(0, "127.0.0.1") {
        report.expected_error("config[0] = '127.0.0.1'", &e);
    }
    if let Err(e) = config.delete_item(0) {
        report.expected_error("del config[0]", &e);
    }
    report.show("config", &config);
    Ok(())
}

pub fn unpacking(report: &mut LessonReport) -> Result<()> {
    let coordenada = tuple![1920, 1080];
    let [ancho, alto] = coordenada.unpack()?;
    report.show("ancho", ancho);
    report.show("alto", alto);

    let puntos = list![tuple![0, 0], tuple![1, 1], tuple![2, 4]];
    for punto in &puntos {
        let [x, y] = unpack_pair(punto)?;
        report.text(format!("Point: x={}, y={}", x, y));
    }

    if let Err(e) = tuple![1, 2, 3].unpack::<2>() {
        report.expected_error("a, b = (1, 2, 3)", &e);
    }
    Ok(())
}

fn unpack_pair(value: &Value) -> Result<[Value; 2]> {
    match value {
        Value::Tuple(t) => t.unpack(),
        _ => Err(SeqError::UnpackMismatch {
            expected: 2,
            found: 1,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lesson: fn(&mut LessonReport) -> Result<()>) -> LessonReport {
        let mut report = LessonReport::new("test", "Test");
        lesson(&mut report).unwrap();
        report
    }

    #[test]
    fn test_basics_lesson() {
        let report = run(basics);
        assert_eq!(report.value_of("tupla_vacia"), Some("()"));
        assert_eq!(report.value_of("type((50))"), Some("<class 'int'>"));
        assert_eq!(report.value_of("type((50,))"), Some("<class 'tuple'>"));
        assert_eq!(report.value_of("(50,)"), Some("(50,)"));
        assert_eq!(report.value_of("mi_tupla[1:3]"), Some("(200, 300)"));
        assert_eq!(report.value_of("t1 * 2"), Some("(1, 2, 1, 2)"));
        assert_eq!(report.value_of("len(t3)"), Some("4"));
    }

    #[test]
    fn test_immutability_lesson() {
        let report = run(immutability);
        let errors: Vec<_> = report.expected_errors().collect();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("does not support item assignment"));
        assert!(errors[1].contains("does not support item deletion"));
    }

    #[test]
    fn test_unpacking_lesson() {
        let report = run(unpacking);
        assert_eq!(report.value_of("ancho"), Some("1920"));
        assert_eq!(report.value_of("alto"), Some("1080"));
        assert!(report.steps.contains(&crate::lessons::Step::Text {
            text: "Point: x=2, y=4".to_string()
        }));
        assert_eq!(report.expected_errors().count(), 1);
    }

    #[test]
    fn test_unpack_pair_rejects_scalars() {
        assert!(unpack_pair(&Value::Int(3)).is_err());
    }
}
