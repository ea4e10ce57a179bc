//! Lessons on the mutable list

use crate::error::Result;
use crate::lessons::LessonReport;
use crate::list;
use crate::sequence::{self, sorted, List, SliceSpec};
use crate::value::Value;

pub fn construction(report: &mut LessonReport) -> Result<()> {
    report.show("numeros_pares", list![2, 4, 6, 8, 10]);
    report.show("vocales", list!["a", "e", "i", "o", "u"]);
    report.show("datos_variados", list![1.5, "Hola", true, Value::None, 4]);
    report.show("lista_vacia", List::new());
    report.show("list()", List::default());
    report.show("list(\"Python\")", List::from_chars("Python"));
    Ok(())
}

pub fn indexing(report: &mut LessonReport) -> Result<()> {
    let frutas = list!["manzana", "plátano", "cereza", "dátil"];
    report.show("frutas", &frutas);
    for index in [0, 2, -1, -2] {
        report.show(format!("frutas[{}]", index), frutas.get(index)?.plain());
    }
    Ok(())
}

pub fn slicing(report: &mut LessonReport) -> Result<()> {
    let numeros: List = (0..10).map(|i| Value::Int(i * 10)).collect();
    report.show("numeros", &numeros);

    for notation in ["2:5", ":4", "6:", "::2", "::-1"] {
        let spec = SliceSpec::parse(notation)?;
        report.show(format!("numeros[{}]", spec), numeros.slice(&spec)?);
    }

    let mut copia = numeros.slice(&SliceSpec::full())?;
    report.show("copia = numeros[:]", &copia);
    report.show("copia == numeros", copia == numeros);
    copia.set(0, -1)?;
    report.show("copia[0] = -1", &copia);
    report.show("numeros", &numeros);
    report.show("copia == numeros", copia == numeros);
    Ok(())
}

pub fn mutation(report: &mut LessonReport) -> Result<()> {
    let mut colores = list!["rojo", "verde", "azul"];
    report.show("colores", &colores);
    colores.set(1, "amarillo")?;
    report.show("colores[1] = 'amarillo'", &colores);

    let mut numeros = list![1, 2, 3];
    numeros.append(4);
    numeros.append(5);
    report.show("append(4), append(5)", &numeros);
    numeros.insert(0, 0);
    report.show("insert(0, 0)", &numeros);
    numeros.insert(3, 99);
    report.show("insert(3, 99)", &numeros);

    let mut letras = list!["a", "b", "c", "a", "d"];
    letras.remove(&Value::from("a"))?;
    report.show("letras.remove('a')", &letras);
    if let Err(e) = letras.remove(&Value::from("z")) {
        report.expected_error("letras.remove('z')", &e);
    }

    let mut valores = list![10, 20, 30, 40, 50];
    let eliminado = valores.pop(Some(2))?;
    report.show("valores.pop(2)", format!("{}, removed: {}", valores, eliminado));
    let ultimo = valores.pop(None)?;
    report.show("valores.pop()", format!("{}, removed: {}", valores, ultimo));

    let mut numeros = list![0, 1, 2, 3, 4, 5];
    numeros.delete(0)?;
    report.show("del numeros[0]", &numeros);
    numeros.delete_slice(&SliceSpec::range(1, 3))?;
    report.show("del numeros[1:3]", &numeros);
    Ok(())
}

pub fn ordering(report: &mut LessonReport) -> Result<()> {
    let mut nums = list![54, 23, 91, 45, 12];
    report.show("nums", &nums);
    nums.sort(false)?;
    report.show("nums.sort()", &nums);
    nums.sort(true)?;
    report.show("nums.sort(reverse=True)", &nums);

    let mut nombres = list!["Zoe", "Alex", "Maria"];
    nombres.sort(false)?;
    report.show("nombres.sort()", &nombres);

    let mut elementos = list![1, 2, 3, 4];
    elementos.reverse();
    report.show("elementos.reverse()", &elementos);

    let original = list![30, 10, 50];
    let nueva = sorted(&original, false)?;
    report.show("sorted(original)", &nueva);
    report.show("original", &original);

    let mut mezclados = list![1.5, "Hola", true, Value::None, 4];
    if let Err(e) = mezclados.sort(false) {
        report.expected_error("datos_variados.sort()", &e);
    }
    Ok(())
}

pub fn combining(report: &mut LessonReport) -> Result<()> {
    let a = list![1, 2];
    let b = list![3, 4];
    let c = a.concat(&b);
    report.show("a + b", &c);
    report.show("a * 3", a.repeat(3));
    report.show("3 in c", c.contains(&Value::Int(3)));
    report.show("5 not in c", !c.contains(&Value::Int(5)));
    Ok(())
}

pub fn aggregates(report: &mut LessonReport) -> Result<()> {
    let datos = list![15, -2, 45, 8, 23];
    let values = datos.as_slice();
    report.show("datos", &datos);
    report.show("len(datos)", sequence::count(values));
    report.show("min(datos)", sequence::min(values)?);
    report.show("max(datos)", sequence::max(values)?);
    report.show("sum(datos)", sequence::sum(values)?);
    Ok(())
}

pub fn iteration(report: &mut LessonReport) -> Result<()> {
    let tareas = list!["Lavar ropa", "Hacer compra", "Estudiar Python"];
    report.text("My tasks:");
    for tarea in &tareas {
        report.text(format!("- {}", tarea.plain()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::Step;

    fn run(lesson: fn(&mut LessonReport) -> Result<()>) -> LessonReport {
        let mut report = LessonReport::new("test", "Test");
        lesson(&mut report).unwrap();
        report
    }

    #[test]
    fn test_construction_lesson() {
        let report = run(construction);
        assert_eq!(
            report.value_of("datos_variados"),
            Some("[1.5, 'Hola', True, None, 4]")
        );
        assert_eq!(report.value_of("lista_vacia"), Some("[]"));
        assert_eq!(
            report.value_of("list(\"Python\")"),
            Some("['P', 'y', 't', 'h', 'o', 'n']")
        );
    }

    #[test]
    fn test_indexing_lesson() {
        let report = run(indexing);
        assert_eq!(report.value_of("frutas[0]"), Some("manzana"));
        assert_eq!(report.value_of("frutas[-1]"), Some("dátil"));
        assert_eq!(report.value_of("frutas[-2]"), Some("cereza"));
    }

    #[test]
    fn test_slicing_lesson() {
        let report = run(slicing);
        assert_eq!(report.value_of("numeros[2:5]"), Some("[20, 30, 40]"));
        assert_eq!(report.value_of("numeros[:4]"), Some("[0, 10, 20, 30]"));
        assert_eq!(report.value_of("numeros[6:]"), Some("[60, 70, 80, 90]"));
        assert_eq!(report.value_of("numeros[::2]"), Some("[0, 20, 40, 60, 80]"));
        assert_eq!(
            report.value_of("numeros[::-1]"),
            Some("[90, 80, 70, 60, 50, 40, 30, 20, 10, 0]")
        );
        assert_eq!(
            report.value_of("copia[0] = -1"),
            Some("[-1, 10, 20, 30, 40, 50, 60, 70, 80, 90]")
        );
        let numeros_lines: Vec<_> = report
            .steps
            .iter()
            .filter_map(|step| match step {
                Step::Value { label, value } if label == "numeros" => Some(value.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(numeros_lines.len(), 2);
        assert_eq!(numeros_lines[0], numeros_lines[1]);
        assert_eq!(numeros_lines[1], "[0, 10, 20, 30, 40, 50, 60, 70, 80, 90]");

        let equality: Vec<_> = report
            .steps
            .iter()
            .filter_map(|step| match step {
                Step::Value { label, value } if label == "copia == numeros" => Some(value.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(equality, vec!["true", "false"]);
    }

    #[test]
    fn test_mutation_lesson() {
        let report = run(mutation);
        assert_eq!(report.value_of("insert(3, 99)"), Some("[0, 1, 2, 99, 3, 4, 5]"));
        assert_eq!(report.value_of("letras.remove('a')"), Some("['b', 'c', 'a', 'd']"));
        assert_eq!(report.value_of("valores.pop(2)"), Some("[10, 20, 40, 50], removed: 30"));
        assert_eq!(report.value_of("del numeros[1:3]"), Some("[1, 4, 5]"));
        assert_eq!(report.expected_errors().count(), 1);
    }

    #[test]
    fn test_ordering_lesson() {
        let report = run(ordering);
        assert_eq!(report.value_of("nums.sort(reverse=True)"), Some("[91, 54, 45, 23, 12]"));
        assert_eq!(report.value_of("sorted(original)"), Some("[10, 30, 50]"));
        assert_eq!(report.value_of("original"), Some("[30, 10, 50]"));
        assert_eq!(report.expected_errors().count(), 1);
    }

    #[test]
    fn test_aggregates_lesson() {
        let report = run(aggregates);
        assert_eq!(report.value_of("len(datos)"), Some("5"));
        assert_eq!(report.value_of("min(datos)"), Some("-2"));
        assert_eq!(report.value_of("max(datos)"), Some("45"));
        assert_eq!(report.value_of("sum(datos)"), Some("89"));
    }

    #[test]
    fn test_iteration_lesson() {
        let report = run(iteration);
        assert_eq!(report.steps.len(), 4);
    }
}
