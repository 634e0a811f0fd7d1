mod unsubscribe;
