use ndbuffer::{ClampedU8, DType, DynArray, NdArray, Record};

#[test]
fn serial_many_dim_serde() {
    {
        let a = NdArray::<f32>::from_nested(vec![2.72, 1., 2.]).unwrap();
        let serial = serde_json::to_string(&a).unwrap();
        println!("Serde encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<NdArray<f32>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
    }

    {
        let a = NdArray::<f64>::from_nested(vec![[3., 1., 2.2], [3.1, 4., 7.]]).unwrap();
        let serial = serde_json::to_string(&a).unwrap();
        println!("Serde encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<NdArray<f64>>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
        let text = r##"{"kind":"NdArray","data":[3,1,2.2,3.1,4,7],"shape":[2,3],"dtype":"float64"}"##;
        let b = serde_json::from_str::<NdArray<f64>>(text);
        assert_eq!(a, b.unwrap());
    }

    {
        let a = NdArray::<u16>::from_shape_vec(&[2, 2, 2, 2], (0..16).collect()).unwrap();
        let serial = serde_json::to_string(&a).unwrap();
        println!("Encode {:?} => {:?}", a, serial);
        let res = serde_json::from_str::<NdArray<u16>>(&serial);
        assert_eq!(a, res.unwrap());
    }
}

#[test]
fn serial_record_fields() {
    let a = NdArray::<u8>::from_nested(vec![[1, 2], [3, 4]]).unwrap();
    let serial = serde_json::to_string(&a).unwrap();
    assert_eq!(
        serial,
        r#"{"kind":"NdArray","data":[1.0,2.0,3.0,4.0],"shape":[2,2],"dtype":"uint8"}"#
    );
    assert_eq!(serde_json::to_string(&a.to_record()).unwrap(), serial);
    let record: Record = serde_json::from_str(&serial).unwrap();
    assert_eq!(record, a.to_record());
}

#[test]
fn serial_empty() {
    let a = NdArray::<f32>::new();
    let serial = serde_json::to_string(&a).unwrap();
    let res = serde_json::from_str::<NdArray<f32>>(&serial).unwrap();
    assert_eq!(res.shape(), &[0]);
    assert_eq!(a, res);
}

#[test]
fn serial_wrong_length() {
    let text = r#"{"kind":"NdArray","data":[1,2,3],"shape":[2,2],"dtype":"float32"}"#;
    let err = serde_json::from_str::<NdArray<f32>>(text).unwrap_err();
    assert!(err.to_string().contains("Dimension mismatch (3 != 4)"), "{}", err);
}

#[test]
fn serial_wrong_dtype() {
    let text = r#"{"kind":"NdArray","data":[1],"shape":[1],"dtype":"uint32"}"#;
    assert!(serde_json::from_str::<NdArray<f32>>(text).is_err());
    let text = r#"{"kind":"NdArray","data":[1],"shape":[1],"dtype":"int32"}"#;
    assert!(serde_json::from_str::<Record>(text).is_err());
}

#[test]
fn serial_dyn_array() {
    let a = NdArray::<ClampedU8>::from_nested(vec![-1., 127.5, 300.]).unwrap();
    let serial = serde_json::to_string(&a).unwrap();
    let res = serde_json::from_str::<DynArray>(&serial).unwrap();
    assert_eq!(res.dtype(), DType::Uint8Clamped);
    assert_eq!(res, DynArray::Uint8Clamped(a));
    assert_eq!(serde_json::to_string(&res).unwrap(), serial);
}

#[test]
fn serial_many_dim_serde_msgpack() {
    {
        let a = NdArray::<f32>::from_nested(vec![2.72, 1., 2.]).unwrap();

        let mut buf = Vec::new();
        serde::Serialize::serialize(&a, &mut rmp_serde::Serializer::new(&mut buf))
            .ok()
            .unwrap();

        let mut deserializer = rmp_serde::Deserializer::new(&buf[..]);
        let a_de: NdArray<f32> = serde::Deserialize::deserialize(&mut deserializer).unwrap();

        assert_eq!(a, a_de);
    }

    {
        let a = NdArray::<u32>::from_shape_vec(&[2, 2, 2, 4], (0..32).collect()).unwrap();

        let mut buf = Vec::new();
        serde::Serialize::serialize(&a, &mut rmp_serde::Serializer::new(&mut buf))
            .ok()
            .unwrap();

        let mut deserializer = rmp_serde::Deserializer::new(&buf[..]);
        let a_de: DynArray = serde::Deserialize::deserialize(&mut deserializer).unwrap();

        assert_eq!(DynArray::Uint32(a), a_de);
    }
}

#[test]
fn serial_many_dim_ron() {
    use ron::de::from_str as ron_deserialize;
    use ron::ser::to_string as ron_serialize;

    {
        let a = NdArray::<f32>::from_nested(vec![2.72, 1., 2.]).unwrap();

        let a_s = ron_serialize(&a).unwrap();

        let a_de: NdArray<f32> = ron_deserialize(&a_s).unwrap();

        assert_eq!(a, a_de);
    }

    {
        let a = NdArray::<f64>::from_nested(vec![[3., 1., 2.2], [3.1, 4., 7.]]).unwrap();

        let a_s = ron_serialize(&a).unwrap();

        let a_de: NdArray<f64> = ron_deserialize(&a_s).unwrap();

        assert_eq!(a, a_de);
    }

    {
        let r = NdArray::<ClampedU8>::eye(3).to_record();

        let r_s = ron_serialize(&r).unwrap();

        let r_de: Record = ron_deserialize(&r_s).unwrap();

        assert_eq!(r, r_de);
    }
}
