//! Lua-visible file functions backed by the config proxy.
//!
//! The game scripts use `openfile`/`closefile` plus handle methods to edit
//! their settings file; all of it lands in [`crate::lua_config`] rather than
//! on disk.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use log::warn;
use mlua::{AnyUserData, Lua, UserData, UserDataMethods};

use crate::config::ConfigManager;
use crate::lua_config::ConfigFileProxy;

struct ProxyHandle {
    proxy: Option<ConfigFileProxy>,
}

impl ProxyHandle {
    fn close_inner(&mut self) -> Result<()> {
        match self.proxy.take() {
            Some(proxy) => proxy.close(),
            // Closing twice is harmless, scripts do it.
            None => Ok(()),
        }
    }
}

impl UserData for ProxyHandle {
    fn add_methods<'lua, M: UserDataMethods<'lua, Self>>(methods: &mut M) {
        methods.add_method_mut("read", |_, this, len: Option<usize>| {
            let proxy = this
                .proxy
                .as_mut()
                .ok_or_else(|| mlua::Error::external(anyhow!("config.lua handle is closed")))?;

            let text = match len {
                Some(len) => {
                    let mut buf = vec![0u8; len];
                    let count = proxy.read(&mut buf);
                    buf.truncate(count);
                    String::from_utf8_lossy(&buf).into_owned()
                }
                None => proxy.read_to_string(),
            };

            if text.is_empty() {
                Ok(None)
            } else {
                Ok(Some(text))
            }
        });

        methods.add_method_mut("write", |_, this, chunk: String| {
            let proxy = this
                .proxy
                .as_mut()
                .ok_or_else(|| mlua::Error::external(anyhow!("config.lua handle is closed")))?;
            proxy.write(&chunk);
            Ok(chunk.len())
        });

        methods.add_method_mut("close", |_, this, ()| {
            this.close_inner().map_err(mlua::Error::external)
        });
    }
}

/// Install `openfile(name, mode)` and `closefile(handle)` into `lua`.
///
/// `openfile` follows the io library convention of returning nil when the
/// open fails, since scripts probe for optional files.
pub fn install_config_io(lua: &Lua, config: Rc<RefCell<ConfigManager>>) -> Result<()> {
    let globals = lua.globals();

    let open_config = config.clone();
    let openfile = lua.create_function(move |_, (name, mode): (String, String)| {
        match ConfigFileProxy::open(open_config.clone(), &name, &mode) {
            Ok(proxy) => Ok(Some(ProxyHandle { proxy: Some(proxy) })),
            Err(err) => {
                warn!("openfile('{name}', '{mode}') refused: {err:#}");
                Ok(None)
            }
        }
    })?;
    globals.set("openfile", openfile)?;

    let closefile = lua.create_function(|_, handle: AnyUserData| {
        let mut handle = handle.borrow_mut::<ProxyHandle>()?;
        handle.close_inner().map_err(mlua::Error::external)
    })?;
    globals.set("closefile", closefile)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keys;

    fn fresh_host() -> (Lua, Rc<RefCell<ConfigManager>>) {
        let lua = Lua::new();
        let config = Rc::new(RefCell::new(ConfigManager::default()));
        install_config_io(&lua, config.clone()).unwrap();
        (lua, config)
    }

    #[test]
    fn scripts_read_the_synthesized_config() {
        let (lua, config) = fresh_host();
        config.borrow_mut().set_int(keys::MUSIC_VOLUME, 128);

        let text: String = lua
            .load(
                r#"
                local f = openfile("config.lua", "r")
                local text = f:read()
                closefile(f)
                return text
                "#,
            )
            .eval()
            .unwrap();

        assert!(text.contains("GAME_LANGUAGE = \"en\""));
        assert!(text.contains("SFX_MUSIC_VOLUME = 0.501961"));
    }

    #[test]
    fn scripts_read_in_chunks_until_nil() {
        let (lua, _config) = fresh_host();

        let (head, saw_eof): (String, bool) = lua
            .load(
                r#"
                local f = openfile("config.lua", "r")
                local head = f:read(13)
                while f:read(64) do end
                local eof = f:read(64) == nil
                f:close()
                return head, eof
                "#,
            )
            .eval()
            .unwrap();

        assert_eq!(head, "GAME_LANGUAGE");
        assert!(saw_eof);
    }

    #[test]
    fn scripts_write_settings_back() {
        let (lua, config) = fresh_host();

        lua.load(
            r#"
            local f = openfile("config.lua", "w")
            f:write("-- options menu output\r\n")
            f:write("GAME_SUBTITLES = false\r\nSFX_SOUND_VOLUME = 0.5\r\n")
            closefile(f)
            "#,
        )
        .exec()
        .unwrap();

        let c = config.borrow();
        assert_eq!(c.get_bool(keys::SUBTITLES), Some(false));
        assert_eq!(c.get_int(keys::SFX_VOLUME), Some(127));
    }

    #[test]
    fn openfile_returns_nil_for_other_files() {
        let (lua, _config) = fresh_host();
        let is_nil: bool = lua
            .load(r#"return openfile("scores.lua", "r") == nil"#)
            .eval()
            .unwrap();
        assert!(is_nil);
    }

    #[test]
    fn double_close_is_harmless() {
        let (lua, _config) = fresh_host();
        lua.load(
            r#"
            local f = openfile("config.lua", "r")
            f:close()
            closefile(f)
            "#,
        )
        .exec()
        .unwrap();
    }
}
