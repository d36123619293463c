mod i18n_keys;
