//! Bindings for the `APP.ORDERS_PKG` package.
//!
//! Generated by pkgmap into `db::orders`. Do not edit by hand; regenerate
//! from the argument catalog instead.

#[allow(unused_imports)]
use pkgmap_runtime::{
    AsyncConnection, BindKind, CallError, Connection, Decimal, NaiveDateTime, ProcedureCall,
    RefCursor, Value,
};

/// Outputs of `APP.ORDERS_PKG.GET_INFO`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetInfoOut {
    pub p_name: Option<String>,
    pub p_age: Option<Decimal>,
}

/// Routines of the `APP.ORDERS_PKG` package.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdersPkg;

impl OrdersPkg {
    /// Calls `APP.ORDERS_PKG.ADD_ITEM`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub fn add_item(
        conn: &mut impl Connection,
        p_id: Option<Decimal>,
    ) -> Result<Option<Decimal>, CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.ADD_ITEM");
        call.bind_return(BindKind::Decimal);
        call.bind_input("P_ID", BindKind::Decimal, None, Value::from(p_id));
        conn.execute(&mut call)?;
        let value = call.return_value()?;
        let result: Option<Decimal> = if value.is_null() {
            Default::default()
        } else {
            Some(value.to_decimal()?)
        };
        Ok(result)
    }

    /// Calls `APP.ORDERS_PKG.ADD_ITEM`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub async fn add_item_async(
        conn: &mut impl AsyncConnection,
        p_id: Option<Decimal>,
    ) -> Result<Option<Decimal>, CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.ADD_ITEM");
        call.bind_return(BindKind::Decimal);
        call.bind_input("P_ID", BindKind::Decimal, None, Value::from(p_id));
        conn.execute(&mut call).await?;
        let value = call.return_value()?;
        let result: Option<Decimal> = if value.is_null() {
            Default::default()
        } else {
            Some(value.to_decimal()?)
        };
        Ok(result)
    }

    /// Calls `APP.ORDERS_PKG.GET_INFO`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub fn get_info(
        conn: &mut impl Connection,
        p_key: Option<String>,
    ) -> Result<GetInfoOut, CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.GET_INFO");
        let mut out = GetInfoOut::default();
        call.bind_input("P_KEY", BindKind::Varchar2, Some(30), Value::from(p_key));
        call.bind_output("P_NAME", BindKind::Varchar2, None);
        call.bind_output("P_AGE", BindKind::Decimal, None);
        conn.execute(&mut call)?;
        let value = call.value("P_NAME")?;
        out.p_name = if value.is_null() {
            Default::default()
        } else {
            Some(value.to_text()?)
        };
        let value = call.value("P_AGE")?;
        out.p_age = if value.is_null() {
            Default::default()
        } else {
            Some(value.to_decimal()?)
        };
        Ok(out)
    }

    /// Calls `APP.ORDERS_PKG.GET_INFO`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub async fn get_info_async(
        conn: &mut impl AsyncConnection,
        p_key: Option<String>,
    ) -> Result<GetInfoOut, CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.GET_INFO");
        let mut out = GetInfoOut::default();
        call.bind_input("P_KEY", BindKind::Varchar2, Some(30), Value::from(p_key));
        call.bind_output("P_NAME", BindKind::Varchar2, None);
        call.bind_output("P_AGE", BindKind::Decimal, None);
        conn.execute(&mut call).await?;
        let value = call.value("P_NAME")?;
        out.p_name = if value.is_null() {
            Default::default()
        } else {
            Some(value.to_text()?)
        };
        let value = call.value("P_AGE")?;
        out.p_age = if value.is_null() {
            Default::default()
        } else {
            Some(value.to_decimal()?)
        };
        Ok(out)
    }

    /// Calls `APP.ORDERS_PKG.CALC`.
    ///
    /// Pass `Default::default()` for `p_total` to keep the remote default.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub fn calc(
        conn: &mut impl Connection,
        p_id: Option<Decimal>,
        p_total: &mut Option<Decimal>,
    ) -> Result<(), CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.CALC");
        call.bind_input("P_ID", BindKind::Decimal, None, Value::from(p_id));
        if *p_total != <Option<Decimal>>::default() {
            call.bind_in_out("P_TOTAL", BindKind::Decimal, None, Value::from(p_total.clone()));
        } else {
            call.bind_output("P_TOTAL", BindKind::Decimal, None);
        }
        conn.execute(&mut call)?;
        let value = call.value("P_TOTAL")?;
        *p_total = if value.is_null() {
            Default::default()
        } else {
            Some(value.to_decimal()?)
        };
        Ok(())
    }

    /// Calls `APP.ORDERS_PKG.CALC`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub async fn calc_async(
        conn: &mut impl AsyncConnection,
        p_id: Option<Decimal>,
    ) -> Result<Option<Decimal>, CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.CALC");
        call.bind_input("P_ID", BindKind::Decimal, None, Value::from(p_id));
        call.bind_in_out("P_TOTAL", BindKind::Decimal, None, Value::Null);
        conn.execute(&mut call).await?;
        let value = call.value("P_TOTAL")?;
        let result: Option<Decimal> = if value.is_null() {
            Default::default()
        } else {
            Some(value.to_decimal()?)
        };
        Ok(result)
    }

    /// Calls `APP.ORDERS_PKG.TAG_ITEM`.
    ///
    /// Pass `Default::default()` for `p_tag` to keep the remote default.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub fn tag_item(
        conn: &mut impl Connection,
        p_id: Option<Decimal>,
        p_tag: &mut char,
    ) -> Result<(), CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.TAG_ITEM");
        call.bind_input("P_ID", BindKind::Decimal, None, Value::from(p_id));
        if *p_tag != <char>::default() {
            call.bind_in_out("P_TAG", BindKind::Char, Some(1), Value::from(p_tag.clone()));
        } else {
            call.bind_output("P_TAG", BindKind::Char, Some(1));
        }
        conn.execute(&mut call)?;
        let value = call.value("P_TAG")?;
        *p_tag = if value.is_null() {
            Default::default()
        } else {
            value.to_char()?
        };
        Ok(())
    }

    /// Calls `APP.ORDERS_PKG.TAG_ITEM`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub async fn tag_item_async(
        conn: &mut impl AsyncConnection,
        p_id: Option<Decimal>,
    ) -> Result<char, CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.TAG_ITEM");
        call.bind_input("P_ID", BindKind::Decimal, None, Value::from(p_id));
        call.bind_in_out("P_TAG", BindKind::Char, Some(1), Value::Null);
        conn.execute(&mut call).await?;
        let value = call.value("P_TAG")?;
        let result: char = if value.is_null() {
            Default::default()
        } else {
            value.to_char()?
        };
        Ok(result)
    }

    /// Calls `APP.ORDERS_PKG.SET_FLAG`.
    ///
    /// Pass `Default::default()` for `p_flag` to keep the remote default.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub fn set_flag(
        conn: &mut impl Connection,
        p_id: Option<Decimal>,
        p_flag: Option<bool>,
    ) -> Result<(), CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.SET_FLAG");
        call.bind_input("P_ID", BindKind::Decimal, None, Value::from(p_id));
        if p_flag != <Option<bool>>::default() {
            call.bind_input("P_FLAG", BindKind::Boolean, None, Value::from(p_flag));
        }
        conn.execute(&mut call)?;
        Ok(())
    }

    /// Calls `APP.ORDERS_PKG.SET_FLAG`.
    ///
    /// Pass `Default::default()` for `p_flag` to keep the remote default.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub async fn set_flag_async(
        conn: &mut impl AsyncConnection,
        p_id: Option<Decimal>,
        p_flag: Option<bool>,
    ) -> Result<(), CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.SET_FLAG");
        call.bind_input("P_ID", BindKind::Decimal, None, Value::from(p_id));
        if p_flag != <Option<bool>>::default() {
            call.bind_input("P_FLAG", BindKind::Boolean, None, Value::from(p_flag));
        }
        conn.execute(&mut call).await?;
        Ok(())
    }

    /// Calls `APP.ORDERS_PKG.OPEN_ORDERS`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub fn open_orders(
        conn: &mut impl Connection,
    ) -> Result<RefCursor, CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.OPEN_ORDERS");
        call.bind_output("P_CUR", BindKind::RefCursor, None);
        conn.execute(&mut call)?;
        let value = call.value("P_CUR")?;
        let result: RefCursor = if value.is_null() {
            Default::default()
        } else {
            value.to_cursor()?
        };
        Ok(result)
    }

    /// Calls `APP.ORDERS_PKG.OPEN_ORDERS`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    pub async fn open_orders_async(
        conn: &mut impl AsyncConnection,
    ) -> Result<RefCursor, CallError> {
        let mut call = ProcedureCall::new("APP.ORDERS_PKG.OPEN_ORDERS");
        call.bind_output("P_CUR", BindKind::RefCursor, None);
        conn.execute(&mut call).await?;
        let value = call.value("P_CUR")?;
        let result: RefCursor = if value.is_null() {
            Default::default()
        } else {
            value.to_cursor()?
        };
        Ok(result)
    }

    /// Calls `APP.ORDERS_PKG.SAVE`.
    ///
    /// The routine takes a record-shaped argument that cannot be bound; every
    /// call returns [`CallError::NotImplemented`].
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    #[allow(unused_variables)]
    pub fn save(
        conn: &mut impl Connection,
        p_rec: Value,
    ) -> Result<(), CallError> {
        Err(CallError::NotImplemented {
            routine: "APP.ORDERS_PKG.SAVE".to_string(),
        })
    }

    /// Calls `APP.ORDERS_PKG.SAVE`.
    ///
    /// The routine takes a record-shaped argument that cannot be bound; every
    /// call returns [`CallError::NotImplemented`].
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if the call fails or a returned value has an
    /// unexpected type.
    #[allow(unused_variables)]
    #[allow(clippy::unused_async)]
    pub async fn save_async(
        conn: &mut impl AsyncConnection,
        p_rec: Value,
    ) -> Result<(), CallError> {
        Err(CallError::NotImplemented {
            routine: "APP.ORDERS_PKG.SAVE".to_string(),
        })
    }
}
