#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::api::indicator::snapshot_from_value;
    use crate::error::ApiError;

    #[test]
    fn keeps_only_numeric_valued_entries() {
        let data = json!({
            "version": "1.7.0",
            "autor": "mindicador.cl",
            "fecha": "2024-01-10T04:00:00.000Z",
            "uf": {
                "codigo": "uf",
                "nombre": "Unidad de fomento",
                "unidad_medida": "Pesos",
                "valor": 37042.58
            },
            "dolar": {
                "codigo": "dolar",
                "nombre": "Dólar observado",
                "unidad_medida": "Pesos",
                "valor": 900.0
            },
            "broken": {
                "codigo": "broken",
                "nombre": "Sin valor",
                "unidad_medida": "Pesos"
            }
        });

        let snapshot = snapshot_from_value(data).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(*snapshot.get("dolar").unwrap().value(), dec!(900));
        assert_eq!(*snapshot.get("uf").unwrap().value(), dec!(37042.58));
        assert!(snapshot.get("broken").is_none());
    }

    #[test]
    fn zero_valued_entries_are_filtered_out() {
        let data = json!({
            "ipc": {
                "codigo": "ipc",
                "nombre": "Indice de Precios al Consumidor",
                "unidad_medida": "Porcentaje",
                "valor": 0.0
            },
            "dolar": {
                "codigo": "dolar",
                "nombre": "Dólar observado",
                "unidad_medida": "Pesos",
                "valor": 900.0
            }
        });

        let snapshot = snapshot_from_value(data).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("ipc").is_none());
    }

    #[test]
    fn entries_are_labeled_by_name_or_uppercased_code() {
        let data = json!({
            "dolar": {
                "codigo": "dolar",
                "nombre": "Dólar observado",
                "unidad_medida": "Pesos",
                "valor": 900.0
            },
            "utm": {
                "codigo": "utm",
                "unidad_medida": "Pesos",
                "valor": 65000.0
            }
        });

        let snapshot = snapshot_from_value(data).unwrap();

        assert_eq!(snapshot.get("dolar").unwrap().label(), "Dólar observado");
        assert_eq!(snapshot.get("utm").unwrap().label(), "UTM");
    }

    #[test]
    fn an_empty_object_yields_an_empty_snapshot() {
        let snapshot = snapshot_from_value(json!({})).unwrap();

        assert!(snapshot.is_empty());
    }

    #[test]
    fn a_non_object_body_is_a_format_error() {
        let err = snapshot_from_value(json!([1, 2, 3])).unwrap_err();

        assert!(matches!(err, ApiError::Format(_)));
    }
}
